#![allow(dead_code)]

use std::collections::HashMap;

use wirevalue_record::{DescriptorError, IntEnum, Record, RecordDescriptor};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Child {
    pub flag: bool,
}

impl Record for Child {
    const NAME: &'static str = "Child";

    fn describe() -> Result<RecordDescriptor<Self>, DescriptorError> {
        RecordDescriptor::builder(Self::NAME)
            .field("flag", |c: &Child| &c.flag, |c: &mut Child| &mut c.flag)
            .build()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Sampling,
    Streaming,
}

impl IntEnum for Mode {
    fn to_index(self) -> i64 {
        self as i64
    }

    fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Mode::Idle),
            1 => Some(Mode::Sampling),
            2 => Some(Mode::Streaming),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Telemetry {
    pub count: i32,
    pub label: String,
    pub tags: Vec<String>,
    pub child: Child,
    pub mode: Mode,
    pub ratio: f64,
    pub limits: HashMap<String, i32>,
    pub note: Option<String>,
    pub history: Vec<Child>,
}

impl Record for Telemetry {
    const NAME: &'static str = "Telemetry";

    fn describe() -> Result<RecordDescriptor<Self>, DescriptorError> {
        RecordDescriptor::builder(Self::NAME)
            .field("count", |t: &Telemetry| &t.count, |t: &mut Telemetry| &mut t.count)
            .field("label", |t: &Telemetry| &t.label, |t: &mut Telemetry| &mut t.label)
            .field("tags", |t: &Telemetry| &t.tags, |t: &mut Telemetry| &mut t.tags)
            .field("child", |t: &Telemetry| &t.child, |t: &mut Telemetry| &mut t.child)
            .enumeration("mode", |t: &Telemetry| &t.mode, |t: &mut Telemetry| &mut t.mode)
            .field("ratio", |t: &Telemetry| &t.ratio, |t: &mut Telemetry| &mut t.ratio)
            .field("limits", |t: &Telemetry| &t.limits, |t: &mut Telemetry| &mut t.limits)
            .field("note", |t: &Telemetry| &t.note, |t: &mut Telemetry| &mut t.note)
            .field("history", |t: &Telemetry| &t.history, |t: &mut Telemetry| &mut t.history)
            .build()
    }
}

pub fn sample_telemetry() -> Telemetry {
    Telemetry {
        count: 12,
        label: "sensor-a".into(),
        tags: vec!["alpha".into(), "beta".into()],
        child: Child { flag: true },
        mode: Mode::Streaming,
        ratio: 0.75,
        limits: HashMap::from([("low".to_string(), 1), ("high".to_string(), 9)]),
        note: None,
        history: vec![Child { flag: false }, Child { flag: true }],
    }
}
