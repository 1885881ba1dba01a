//! Integration tests for reference reporting under each pointer policy.

mod common;

use common::{PointerSample, collect, init_tracing, pointer_sample, pv};
use flatwalk::{Options, PointerPolicy, RootName};
use flatwalk_value::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn expected(policy: PointerPolicy, s: &PointerSample) -> Vec<(Vec<String>, Value)> {
    use PointerPolicy::*;

    let slice = [
        pv("unexportedSlice.0", 1_i64),
        pv("unexportedSlice.1", 2_i64),
        pv("unexportedSlice.2", 3_i64),
    ];

    // References below private fields are never reported, only followed.
    let mut out = match policy {
        JustReference => vec![
            pv("IntPtr", s.int_ptr.clone()),
            pv("IntPtrPtr", s.int_ptr_ptr.clone()),
            pv("unexportedString", "hello"),
            pv("unexportedNil", Value::Nil),
            pv("ExportedStruct", s.exported_struct.clone()),
        ],
        JustValue => vec![
            pv("IntPtr", 5_i64),
            pv("IntPtrPtr", 5_i64),
            pv("unexportedString", "hello"),
            pv("unexportedNil", Value::Nil),
            pv("ExportedStruct.Data", 123.456_f64),
        ],
        Both => vec![
            pv("IntPtr", s.int_ptr.clone()),
            pv("IntPtr", 5_i64),
            pv("IntPtrPtr", s.int_ptr_ptr.clone()),
            pv("IntPtrPtr", 5_i64),
            pv("unexportedString", "hello"),
            pv("unexportedNil", Value::Nil),
            pv("ExportedStruct", s.exported_struct.clone()),
            pv("ExportedStruct.Data", s.data.clone()),
            pv("ExportedStruct.Data", 123.456_f64),
        ],
        FollowComplexOnly => vec![
            pv("IntPtr", s.int_ptr.clone()),
            pv("IntPtrPtr", s.int_ptr_ptr.clone()),
            pv("unexportedString", "hello"),
            pv("unexportedNil", Value::Nil),
            pv("ExportedStruct.Data", s.data.clone()),
        ],
    };
    out.push(pv("unexportedStruct.Data", 123.456_f64));
    out.push(pv("unexportedNilStruct", Value::Nil));
    out.extend(slice);
    out
}

#[rstest]
#[case::just_reference(PointerPolicy::JustReference)]
#[case::just_value(PointerPolicy::JustValue)]
#[case::both(PointerPolicy::Both)]
#[case::follow_complex_only(PointerPolicy::FollowComplexOnly)]
fn test_pointer_policy_matrix(#[case] policy: PointerPolicy) {
    init_tracing();
    let s = pointer_sample();
    let options = Options::new()
        .expand_unexported(true)
        .add_nil_containers(true)
        .add_nil_fields(true)
        .pointer_policy(policy);

    assert_eq!(collect(&s.root, &options), expected(policy, &s));
}

#[test]
fn test_nil_references_are_gated_by_pointee_kind() {
    let s = pointer_sample();
    let base = Options::new().expand_unexported(true);

    let has = |options: &Options, name: &str| {
        collect(&s.root, options)
            .iter()
            .any(|(path, value)| path == &[name] && value.is_nil())
    };

    assert!(!has(&base, "unexportedNil"));
    assert!(!has(&base, "unexportedNilStruct"));

    let fields = base.clone().add_nil_fields(true);
    assert!(has(&fields, "unexportedNil"));
    assert!(!has(&fields, "unexportedNilStruct"));

    let containers = base.add_nil_containers(true);
    assert!(!has(&containers, "unexportedNil"));
    assert!(has(&containers, "unexportedNilStruct"));
}

#[rstest]
#[case::empty(RootName::Empty, &[])]
#[case::placeholder(RootName::Placeholder("$".into()), &["$"])]
fn test_root_reference_naming(#[case] root_name: RootName, #[case] expected: &[&str]) {
    let root = Value::pointer(5_i64);
    let options = Options::new()
        .pointer_policy(PointerPolicy::JustReference)
        .root_name(root_name);

    let walked = collect(&root, &options);
    assert_eq!(walked.len(), 1);
    assert_eq!(walked[0].0, expected);
    assert_eq!(walked[0].1, root);
}
