//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::ops::ControlFlow;

use flatwalk::{Options, walk};
use flatwalk_value::{Complex, Kind, Mapping, Pointer, Record, Slice, Value};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Runs a walk and copies out every `(path, value)` pair.
pub fn collect(root: &Value, options: &Options) -> Vec<(Vec<String>, Value)> {
    let mut out = Vec::new();
    walk(root, options, |path, value| {
        out.push((path.to_vec(), value.clone()));
        ControlFlow::Continue(())
    });
    out
}

/// Builds an expected `(path, value)` pair from a dotted path.
pub fn pv(path: &str, value: impl Into<Value>) -> (Vec<String>, Value) {
    let segments = if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').map(str::to_string).collect()
    };
    (segments, value.into())
}

/// A record exercising every shape, with handles kept for comparisons.
pub struct Sample {
    pub root: Value,
    /// `S.Ptr`, shared with the inner level of `PtrPtr`.
    pub int_ref: Value,
    pub ptr_ptr: Value,
}

pub fn sample() -> Sample {
    let int_ref = Value::pointer(123_i64);
    let ptr_ptr = Value::pointer(int_ref.clone());
    let text = "string";

    let inner = Record::new("S")
        .field("D", "D")
        .field("Ptr", int_ref.clone())
        .field("M", Mapping::from_text_entries([("k", 123_i64)]))
        .private("notExportedMap", Mapping::from_text_entries([("k", "v")]));

    let root = Record::new("testStruct")
        .field("A", 5_i64)
        .field("B", 6_u64)
        .field("S", inner)
        .field("Nested", Record::new("nested").field("Val", true))
        .private("embedded", Record::new("embedded").field("S", 123_i8))
        .field("Iface", iface("iface"))
        .field("PtrPtr", ptr_ptr.clone())
        .field(
            "M",
            Value::pointer(Mapping::from_text_entries([("key", "value")])),
        )
        .field("Slice", Value::slice([26.05_f64, 1.1, 23.12]))
        .field("Array", Value::array([1.0_f32, 2.0, 3.0]))
        .field("NilSlice", Slice::nil())
        .field("Complex64", Complex::new(1.0_f32, 2.0))
        .field("Complex128", Complex::new(3.0_f64, 4.0))
        .private("notExportedInt", 123_i64)
        .private("notExportedIface", iface(text))
        .private("notExportedStruct", Record::new("notExportedStruct").field("A", 0_i64))
        .private("notExportedPointer", Value::pointer(text));

    Sample {
        root: Value::pointer(root),
        int_ref,
        ptr_ptr,
    }
}

/// An interface holding a reference to an implementing record.
fn iface(val: &str) -> Value {
    Value::interface(Value::pointer(
        Record::new("interfaceImpl").field("Val", val),
    ))
}

/// References of every kind, including nil ones.
///
/// The root is the record itself so that every policy reaches its fields.
pub struct PointerSample {
    pub root: Value,
    pub int_ptr: Value,
    pub int_ptr_ptr: Value,
    pub exported_struct: Value,
    /// `Data` of both structs; they share one float.
    pub data: Value,
}

pub fn pointer_sample() -> PointerSample {
    let int_ptr = Value::pointer(5_i64);
    let int_ptr_ptr = Value::pointer(int_ptr.clone());
    let data = Value::pointer(123.456_f64);
    let small = || Record::new("SmallStruct").field("Data", data.clone());
    let exported_struct = Value::pointer(small());

    let root = Record::new("PointerTestStruct")
        .field("IntPtr", int_ptr.clone())
        .field("IntPtrPtr", int_ptr_ptr.clone())
        .private("unexportedString", Value::pointer("hello"))
        .private("unexportedNil", Pointer::nil(Kind::Text))
        .field("ExportedStruct", exported_struct.clone())
        .private("unexportedStruct", Value::pointer(small()))
        .private("unexportedNilStruct", Pointer::nil(Kind::Record))
        .private("unexportedSlice", Value::slice([1_i64, 2, 3]));

    PointerSample {
        root: Value::from(root),
        int_ptr,
        int_ptr_ptr,
        exported_struct,
        data,
    }
}
