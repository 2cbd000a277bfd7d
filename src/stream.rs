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
//
// The pipeline: reader -> verb chain -> writer.
//
// Each verb runs on its own thread, joined to its neighbors by
// channels, so a buffering verb like tac never stalls the reader. A
// verb thread exits after it has processed the end-of-stream marker;
// the writer exits after rendering everything up to the marker.
// Dropping a receiver closes the upstream channel, which upstream
// stages observe as failed sends and shut down -- that is the whole
// cancellation story.

use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::config::{Config, OutputFormat, Verb};
use crate::dkvp;
use crate::json;
use crate::mapper::{Cat, Mapper, Tac};
use crate::record::{Context, RecordAndContext};

pub fn build(verb: Verb) -> Box<dyn Mapper + Send> {
    match verb {
        Verb::Cat => Box::new(Cat),
        Verb::Tac => Box::new(Tac::new()),
    }
}

// Parse input lines into records and feed them downstream, then send
// the end-of-stream marker carrying the final context.
fn read_records(
    config: &Config,
    input: impl BufRead,
    out: Sender<RecordAndContext>,
) {
    let mut context = Context {
        filename: "(stdin)".to_string(),
        nr: 0,
        fnr: 0,
    };
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        context.nr += 1;
        context.fnr += 1;
        let record = dkvp::parse(&line, &config.ifs, &config.ips);
        trace!("read {:?} {:?}", context.nr, record);
        if out
            .send(RecordAndContext::record(record, context.clone()))
            .is_err()
        {
            return;
        }
    }
    let _ = out.send(RecordAndContext::end_of_stream(context));
}

// Render records until the end-of-stream marker arrives.
fn write_records(
    config: &Config,
    output: &mut impl Write,
    input: Receiver<RecordAndContext>,
) {
    for rac in input {
        match rac.record {
            Some(record) => {
                let line = match config.format {
                    OutputFormat::Dkvp => {
                        dkvp::render(&record, &config.ofs, &config.ops)
                    }
                    OutputFormat::Json => json::render(&record),
                };
                if writeln!(output, "{}", line).is_err() {
                    return;
                }
            }
            None => return,
        }
    }
}

fn mapper_loop(
    mut mapper: Box<dyn Mapper + Send>,
    input: Receiver<RecordAndContext>,
    out: Sender<RecordAndContext>,
) {
    for rac in input {
        let done = rac.is_end_of_stream();
        mapper.map(rac, &out);
        if done {
            return;
        }
    }
}

// Run the whole pipeline to completion.
pub fn run(config: &Config, input: impl BufRead + Send, output: &mut impl Write) {
    let (source, mut downstream) = channel();
    let mut stages = Vec::new();
    for &verb in config.chain.iter() {
        let (sender, receiver) = channel();
        stages.push((build(verb), downstream, sender));
        downstream = receiver;
    }

    thread::scope(|scope| {
        scope.spawn(move || read_records(config, input, source));
        for (mapper, receiver, sender) in stages {
            scope.spawn(move || mapper_loop(mapper, receiver, sender));
        }
        write_records(config, output, downstream);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_to_string(config: &Config, input: &str) -> String {
        let mut output = Vec::new();
        run(config, Cursor::new(input.to_string()), &mut output);
        String::from_utf8(output).unwrap()
    }

    fn config_with(chain: Vec<Verb>) -> Config {
        Config {
            chain,
            ..Config::default()
        }
    }

    #[test]
    fn test_cat_passes_through() {
        let config = config_with(vec![Verb::Cat]);
        assert_eq!(
            run_to_string(&config, "a=1\na=2\na=3\n"),
            "a=1\na=2\na=3\n"
        );
    }

    #[test]
    fn test_tac_reverses_stream() {
        let config = config_with(vec![Verb::Tac]);
        assert_eq!(
            run_to_string(&config, "a=1\na=2\na=3\n"),
            "a=3\na=2\na=1\n"
        );
    }

    #[test]
    fn test_tac_twice_restores_order() {
        let config = config_with(vec![Verb::Tac, Verb::Tac]);
        assert_eq!(
            run_to_string(&config, "a=1\na=2\na=3\n"),
            "a=1\na=2\na=3\n"
        );
    }

    #[test]
    fn test_empty_input() {
        let config = config_with(vec![Verb::Tac]);
        assert_eq!(run_to_string(&config, ""), "");
    }

    #[test]
    fn test_values_flow_through_inference_and_back() {
        let config = config_with(vec![Verb::Cat]);
        assert_eq!(
            run_to_string(&config, "a=0x10,b=1.50,c=hello,d=\n"),
            "a=0x10,b=1.50,c=hello,d=\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut config = config_with(vec![Verb::Cat]);
        config.format = OutputFormat::Json;
        assert_eq!(
            run_to_string(&config, "a=1,b=x\n"),
            "{\"a\":1,\"b\":\"x\"}\n"
        );
    }
}
