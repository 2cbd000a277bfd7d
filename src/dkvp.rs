// The delimited key-value pair line format: fields joined by a field
// separator, each field a key and value joined by a pair separator, as
// in "a=1,b=2.5,c=hello". A field with no pair separator gets its 1-up
// position as its key. Values are type-inferred on the way in and
// printed through their string form on the way out.

use crate::record::Record;
use crate::value::Value;

pub fn parse(line: &str, ifs: &str, ips: &str) -> Record {
    let mut record = Record::new();
    if line.is_empty() {
        return record;
    }
    for (index, field) in line.split(ifs).enumerate() {
        match field.find(ips) {
            Some(cut) => {
                let key = &field[..cut];
                let value = &field[cut + ips.len()..];
                record.put(key, Value::infer(value));
            }
            None => {
                record.put(&(index + 1).to_string(), Value::infer(field));
            }
        }
    }
    record
}

pub fn render(record: &Record, ofs: &str, ops: &str) -> String {
    let mut line = String::new();
    for (index, (key, value)) in record.iter().enumerate() {
        if index > 0 {
            line.push_str(ofs);
        }
        line.push_str(key);
        line.push_str(ops);
        line.push_str(&value.to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let record = parse("a=1,b=2.5,c=hello", ",", "=");
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), &Value::from_i64(1));
        assert_eq!(record.get("b"), &Value::from_f64(2.5));
        assert_eq!(record.get("c"), &Value::from_text("hello"));
    }

    #[test]
    fn test_parse_positional_keys() {
        let record = parse("x,y=2", ",", "=");
        assert_eq!(record.get("1"), &Value::from_text("x"));
        assert_eq!(record.get("y"), &Value::from_i64(2));
    }

    #[test]
    fn test_parse_empty_value_is_void() {
        let record = parse("a=,b=2", ",", "=");
        assert_eq!(record.get("a"), &Value::Void);
        assert_eq!(record.get("b"), &Value::from_i64(2));
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(parse("", ",", "=").is_empty());
    }

    #[test]
    fn test_parse_custom_separators() {
        let record = parse("a:1;b:2", ";", ":");
        assert_eq!(record.get("a"), &Value::from_i64(1));
        assert_eq!(record.get("b"), &Value::from_i64(2));
    }

    #[test]
    fn test_render() {
        let record = parse("a=1,b=hello,c=", ",", "=");
        assert_eq!(render(&record, ",", "="), "a=1,b=hello,c=");
        assert_eq!(render(&record, ";", ":"), "a:1;b:hello;c:");
    }

    #[test]
    fn test_render_preserves_spelling() {
        let record = parse("a=0x10,b=1.50", ",", "=");
        assert_eq!(render(&record, ",", "="), "a=0x10,b=1.50");
    }
}
