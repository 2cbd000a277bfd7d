// fieldpipe: featherweight record-stream processor.
//
// Copyright (C) 2019  Brandon Lewis
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License along with this program.  If not, see
// <https://www.gnu.org/licenses/>.

extern crate regex;
extern crate ron;
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod util;

pub mod arith;
pub mod compare;
pub mod concat;
pub mod config;
pub mod dispatch;
pub mod dkvp;
pub mod json;
pub mod logic;
pub mod mapper;
pub mod record;
pub mod stream;
pub mod value;
