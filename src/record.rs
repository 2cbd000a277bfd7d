// Records and their stream framing.

use crate::value::Value;

// An insertion-ordered sequence of named fields. Writing to a name
// that already exists replaces its value in place; a new name appends.
// Records are small, so lookups are linear scans.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Record {
        Record { fields: Vec::new() }
    }

    pub fn put(&mut self, key: &str, value: Value) {
        for (name, slot) in self.fields.iter_mut() {
            if name == key {
                *slot = value;
                return;
            }
        }
        self.fields.push((key.to_string(), value));
    }

    // The value under the given key, or Absent -- the value algebra's
    // name for "this record never had that field".
    pub fn get(&self, key: &str) -> &Value {
        static ABSENT: Value = Value::Absent;
        for (name, value) in self.fields.iter() {
            if name == key {
                return value;
            }
        }
        &ABSENT
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.fields.iter()
    }
}

// Where a record sits in the input: source name, position in the whole
// stream, position within its source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    pub filename: String,
    pub nr: u64,
    pub fnr: u64,
}

// The unit that flows through mapper channels: a record plus its
// context. An item with no record is the end-of-stream marker, carrying
// the last context observed.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordAndContext {
    pub record: Option<Record>,
    pub context: Context,
}

impl RecordAndContext {
    pub fn record(record: Record, context: Context) -> RecordAndContext {
        RecordAndContext {
            record: Some(record),
            context,
        }
    }

    pub fn end_of_stream(context: Context) -> RecordAndContext {
        RecordAndContext {
            record: None,
            context,
        }
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.record.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_preserves_order() {
        let mut record = Record::new();
        record.put("b", Value::from_i64(1));
        record.put("a", Value::from_i64(2));
        record.put("c", Value::from_i64(3));
        let keys: Vec<&str> =
            record.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_put_replaces_in_place() {
        let mut record = Record::new();
        record.put("a", Value::from_i64(1));
        record.put("b", Value::from_i64(2));
        record.put("a", Value::from_i64(9));
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), &Value::from_i64(9));
        let keys: Vec<&str> =
            record.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_get_missing_is_absent() {
        let record = Record::new();
        assert_eq!(record.get("nope"), &Value::Absent);
    }

    #[test]
    fn test_end_of_stream_marker() {
        let context = Context {
            filename: "x".to_string(),
            nr: 3,
            fnr: 3,
        };
        let marker = RecordAndContext::end_of_stream(context.clone());
        assert!(marker.is_end_of_stream());
        assert!(!RecordAndContext::record(Record::new(), context)
            .is_end_of_stream());
    }
}
