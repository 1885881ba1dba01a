//! Integration tests for walking and flattening a record that exercises
//! every shape: scalars, nested and private records, interfaces, reference
//! chains, maps, slices, arrays and complex numbers.

mod common;

use std::ops::ControlFlow;

use common::{collect, init_tracing, pv, sample};
use flatwalk::{FlatMap, Options, PointerPolicy, flatten, walk};
use flatwalk_value::{Complex, Map, Mapping, Record, Value};
use rstest::rstest;

fn tail() -> Vec<(Vec<String>, Value)> {
    vec![
        pv("M.key", "value"),
        pv("Slice.0", 26.05_f64),
        pv("Slice.1", 1.1_f64),
        pv("Slice.2", 23.12_f64),
        pv("Array.0", 1.0_f32),
        pv("Array.1", 2.0_f32),
        pv("Array.2", 3.0_f32),
    ]
}

fn complex_fields() -> Vec<(Vec<String>, Value)> {
    vec![
        pv("Complex64", Complex::new(1.0_f32, 2.0)),
        pv("Complex128", Complex::new(3.0_f64, 4.0)),
    ]
}

fn as_flat(pairs: &[(Vec<String>, Value)]) -> FlatMap {
    pairs
        .iter()
        .map(|(path, value)| (path.join("."), value.clone()))
        .collect()
}

mod sample_record {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn expands_everything_with_placeholders() {
        init_tracing();
        let s = sample();
        let options = Options::new()
            .expand_unexported(true)
            .add_nil_containers(true)
            .add_nil_fields(true)
            .sort_map_keys(true);

        let mut expected = vec![
            pv("A", 5_i64),
            pv("B", 6_u64),
            pv("S.D", "D"),
            pv("S.Ptr", s.int_ref.clone()),
            pv("S.M.k", 123_i64),
            pv("S.notExportedMap.k", "v"),
            pv("Nested.Val", true),
            pv("embedded.S", 123_i8),
            pv("Iface.Val", "iface"),
            pv("PtrPtr", s.ptr_ptr.clone()),
        ];
        expected.extend(tail());
        expected.push(pv("NilSlice", Value::Nil));
        expected.extend(complex_fields());
        expected.extend([
            pv("notExportedInt", 123_i64),
            pv("notExportedIface.Val", "string"),
            pv("notExportedStruct.A", 0_i64),
            pv("notExportedPointer", "string"),
        ]);

        let walked = collect(&s.root, &options);
        assert_eq!(walked, expected);
        assert_eq!(flatten(&s.root, &options), as_flat(&expected));
    }

    #[rstest]
    #[case::nil_containers(true)]
    #[case::no_placeholders(false)]
    fn hides_private_fields(#[case] add_nil_containers: bool) {
        init_tracing();
        let s = sample();
        let options = Options::new().add_nil_containers(add_nil_containers);

        let mut expected = vec![
            pv("A", 5_i64),
            pv("B", 6_u64),
            pv("S.D", "D"),
            pv("S.Ptr", s.int_ref.clone()),
            pv("S.M.k", 123_i64),
            pv("Nested.Val", true),
            pv("Iface.Val", "iface"),
            pv("PtrPtr", s.ptr_ptr.clone()),
        ];
        expected.extend(tail());
        if add_nil_containers {
            expected.push(pv("NilSlice", Value::Nil));
        }
        expected.extend(complex_fields());

        let walked = collect(&s.root, &options);
        assert_eq!(walked, expected);
        assert_eq!(flatten(&s.root, &options), as_flat(&expected));
    }

    #[test]
    fn renders_dereferenced_values() {
        init_tracing();
        let s = sample();
        let options = Options::new()
            .sort_map_keys(true)
            .expand_unexported(true)
            .pointer_policy(PointerPolicy::JustValue);

        let mut lines = Vec::new();
        walk(&s.root, &options, |path, value| {
            lines.push(format!("{:?} ---> {}", path.join("."), value));
            ControlFlow::Continue(())
        });

        insta::assert_snapshot!(lines.join("\n"), @r#"
        "A" ---> 5
        "B" ---> 6
        "S.D" ---> D
        "S.Ptr" ---> 123
        "S.M.k" ---> 123
        "S.notExportedMap.k" ---> v
        "Nested.Val" ---> true
        "embedded.S" ---> 123
        "Iface.Val" ---> iface
        "PtrPtr" ---> 123
        "M.key" ---> value
        "Slice.0" ---> 26.05
        "Slice.1" ---> 1.1
        "Slice.2" ---> 23.12
        "Array.0" ---> 1
        "Array.1" ---> 2
        "Array.2" ---> 3
        "Complex64" ---> (1+2i)
        "Complex128" ---> (3+4i)
        "notExportedInt" ---> 123
        "notExportedIface.Val" ---> string
        "notExportedStruct.A" ---> 0
        "notExportedPointer" ---> string
        "#);
    }

    #[test]
    fn flatten_is_idempotent() {
        let s = sample();
        let options = Options::new().expand_unexported(true).sort_map_keys(true);
        assert_eq!(flatten(&s.root, &options), flatten(&s.root, &options));
    }

    #[test]
    fn stops_after_exactly_n_callbacks() {
        init_tracing();
        let s = sample();
        let options = Options::new()
            .add_nil_containers(true)
            .add_nil_fields(true)
            .expand_unexported(true);

        let total = collect(&s.root, &options).len();
        assert!(total > 0);

        for i in 0..total {
            let mut current = 0;
            walk(&s.root, &options, |_, _| {
                current += 1;
                if current <= i {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            });
            assert_eq!(current, i + 1, "stop after callback {}", i);
        }
    }
}

mod roots {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitive_root_uses_empty_path() {
        let root = Value::from(5_i64);
        assert_eq!(
            collect(&root, &Options::default()),
            vec![pv("", 5_i64)]
        );
    }

    #[test]
    fn slice_root_indexes_elements() {
        let root = Value::slice([1_i64, 2, 3]);
        assert_eq!(
            collect(&root, &Options::default()),
            vec![pv("0", 1_i64), pv("1", 2_i64), pv("2", 3_i64)]
        );
    }

    #[test]
    fn map_root_uses_keys() {
        let root = Value::from(Mapping::from_text_entries([("a", "b")]));
        let expected = vec![pv("a", "b")];
        assert_eq!(collect(&root, &Options::default()), expected);
        assert_eq!(flatten(&root, &Options::default()), as_flat(&expected));
    }
}

mod maps {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mutually_referencing_maps_flatten_to_nothing() {
        init_tracing();
        let outer = Map::text();
        let inner = Map::text();
        inner
            .insert("m2", Record::new("cycleMapTest2").field("M", outer.clone()))
            .unwrap();
        outer
            .insert("m", Record::new("cycleMapTest").field("M", inner))
            .unwrap();

        let flat = flatten(&Value::from(outer), &Options::default());
        assert!(flat.is_empty());
    }

    #[test]
    fn sorted_walk_visits_keys_in_order() {
        let map = Map::text();
        // Insert in reverse so insertion order differs from key order.
        for c in ('a'..='z').rev() {
            map.insert(c.to_string(), c.to_string()).unwrap();
        }

        let expected: Vec<_> = ('a'..='z')
            .map(|c| pv(&c.to_string(), c.to_string()))
            .collect();
        let walked = collect(&Value::from(map), &Options::new().sort_map_keys(true));
        assert_eq!(walked, expected);
    }
}
