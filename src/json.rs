// JSON Lines output: one object per record, fields in record order.

use serde_json::{Map, Number, Value as Json};

use crate::record::Record;
use crate::value::Value;

fn to_json(value: &Value) -> Json {
    match value {
        Value::Error => Json::String("(error)".to_string()),
        Value::Absent => Json::Null,
        Value::Void => Json::String(String::new()),
        Value::Str(text) => Json::String(text.clone()),
        Value::Int(v, _) => Json::Number(Number::from(*v)),
        // Infinities and NaN have no JSON number form; fall back to
        // the value's string form.
        Value::Float(v, _) => match Number::from_f64(*v) {
            Some(number) => Json::Number(number),
            None => Json::String(value.to_string()),
        },
        Value::Bool(v) => Json::Bool(*v),
    }
}

pub fn render(record: &Record) -> String {
    let mut object = Map::new();
    for (key, value) in record.iter() {
        object.insert(key.clone(), to_json(value));
    }
    Json::Object(object).to_string()
}
