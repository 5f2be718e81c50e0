//! Behavior of the assertion wrapper as seen from a test crate.
//!
//! These tests live outside the library so that their frames count as
//! external callers for attribution.

use std::fmt;

use mighty::{funcs, Myt, Recorder, RunKind};

#[derive(Debug)]
struct TestError;

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("test error")
    }
}

impl std::error::Error for TestError {}

const ERR: Option<&dyn std::error::Error> = Some(&TestError);

#[cfg(test)]
mod counting {
    use super::*;

    #[test]
    fn deq_eq_neq_table() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);

        // (cause, eq/deq calls, neq calls) per operand pair
        let cases: [(Option<&dyn std::error::Error>, [(usize, usize); 3]); 2] = [
            (None, [(0, 1), (1, 0), (2, 0)]),
            (ERR, [(1, 1), (1, 1), (2, 1)]),
        ];

        for (i, (cause, calls)) in cases.into_iter().enumerate() {
            m.eq(1, 1, cause);
            assert_eq!(rec.take().len(), calls[0].0, "[i={i}] eq(1, 1)");
            m.deq(1, 1, cause);
            assert_eq!(rec.take().len(), calls[0].0, "[i={i}] deq(1, 1)");
            m.neq(1, 1, cause);
            assert_eq!(rec.take().len(), calls[0].1, "[i={i}] neq(1, 1)");

            m.eq(1, 2, cause);
            assert_eq!(rec.take().len(), calls[1].0, "[i={i}] eq(1, 2)");
            m.deq(1, 2, cause);
            assert_eq!(rec.take().len(), calls[1].0, "[i={i}] deq(1, 2)");
            m.neq(1, 2, cause);
            assert_eq!(rec.take().len(), calls[1].1, "[i={i}] neq(1, 2)");

            m.eq(1, "3", cause);
            assert_eq!(rec.take().len(), calls[2].0, "[i={i}] eq(1, \"3\")");
            m.deq(1, "3", cause);
            assert_eq!(rec.take().len(), calls[2].0, "[i={i}] deq(1, \"3\")");
            m.neq(1, "3", cause);
            assert_eq!(rec.take().len(), calls[2].1, "[i={i}] neq(1, \"3\")");
        }
    }

    #[test]
    fn deq_on_collections() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);

        let cases: [(Option<&dyn std::error::Error>, usize, usize, usize); 2] =
            [(None, 0, 1, 2), (ERR, 1, 1, 2)];

        for (i, (cause, same, differ, typed)) in cases.into_iter().enumerate() {
            m.deq(vec![1, 2], vec![1, 2], cause);
            assert_eq!(rec.take().len(), same, "[i={i}] same");
            m.deq(vec![1, 2], vec![2, 2], cause);
            assert_eq!(rec.take().len(), differ, "[i={i}] differ");
            m.deq(vec![1, 2], "x", cause);
            assert_eq!(rec.take().len(), typed, "[i={i}] typed");
        }
    }

    #[test]
    fn near_table_both_directions() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);

        let cases: [(f64, f64, f64, Option<&dyn std::error::Error>, usize); 6] = [
            (1.0, 1.0, 1e-6, None, 0),
            (1.0, 1.0, 1e-6, ERR, 1),
            (1.0, 1.001, 1e-2, None, 0),
            (1.0, 1.001, 1e-2, ERR, 1),
            (1.0, 1.001, 1e-4, None, 1),
            (1.0, 1.001, 1e-4, ERR, 1),
        ];

        for (i, (exp, got, eps, cause, calls)) in cases.into_iter().enumerate() {
            m.near(exp, got, eps, cause);
            assert_eq!(rec.take().len(), calls, "[i={i}] near({exp}, {got})");
            m.near(got, exp, eps, cause);
            assert_eq!(rec.take().len(), calls, "[i={i}] near({got}, {exp})");
        }
    }

    #[test]
    fn curried_forms_match_direct_forms() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);

        m.exp_eq(4).got(4, None);
        m.exp_deq(vec!['a']).got(vec!['a'], None);
        m.exp_neq(4).got(5, None);
        m.exp_near(1.0, 1e-2).got(1.001, None);
        assert_eq!(rec.take().len(), 0);

        m.exp_eq(4).got(5, None);
        m.exp_deq(vec!['a']).got(vec!['b'], None);
        m.exp_neq(4).got(4, None);
        m.exp_near(1.0, 1e-4).got(1.001, None);
        assert_eq!(rec.take().len(), 4);
    }

    #[test]
    fn curried_eq_with_cause_on_equal_values() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);
        let expect_four = m.exp_eq(4);
        expect_four.got(4, Some(&TestError));
        assert_eq!(rec.count(), 1);

        // The same value object is reusable.
        expect_four.got(4, None);
        assert_eq!(rec.count(), 1);
    }

    #[test]
    fn result_feeds_operation_outcome_directly() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);

        let mut bytes = "test-data".bytes();
        m.exp_eq(b't').result(bytes.next().ok_or(TestError));
        m.exp_eq(42i64).result("42".parse::<i64>());
        m.exp_near(2.5, 1e-9).result("2.5".parse::<f64>());
        assert_eq!(rec.take().len(), 0);

        m.exp_eq(42i64).result("forty-two".parse::<i64>());
        m.exp_neq(0i64).result("".parse::<i64>());
        assert_eq!(rec.take().len(), 2);
    }

    #[test]
    fn factories() {
        let rec = Recorder::new();

        funcs::eq(&rec)(&1, &2, None);
        funcs::deq(&rec)(&1, &2, None);
        funcs::neq(&rec)(&1, &2, None);
        funcs::near(&rec)(1.0, 1.0, 1e-6, None);
        assert_eq!(rec.take().len(), 2);

        let (eq, neq) = funcs::eq_neq(&rec);
        eq(&1, &2, None);
        assert_eq!(rec.take().len(), 1);
        neq(&1, &2, None);
        assert_eq!(rec.take().len(), 0);

        funcs::exp_eq(&rec)(&1).got(2, None);
        assert_eq!(rec.take().len(), 1);
        funcs::exp_deq(&rec)(&1).got(2, None);
        assert_eq!(rec.take().len(), 1);
        funcs::exp_neq(&rec)(&1).got(2, None);
        assert_eq!(rec.take().len(), 0);
        funcs::exp_near(&rec)(1.0, 1e-6).got(1.0, None);
        assert_eq!(rec.take().len(), 0);

        let (eq, exp_eq) = funcs::eq_exp_eq(&rec);
        eq(&1, &2, None);
        assert_eq!(rec.take().len(), 1);
        exp_eq(&1).got(2, None);
        assert_eq!(rec.take().len(), 1);
    }

    #[test]
    fn factory_curried_eq_with_cause_on_equal_values() {
        let rec = Recorder::new();
        let exp_eq = funcs::exp_eq(&rec);
        exp_eq(&4).got(4, Some(&TestError));
        assert_eq!(rec.take().len(), 1);

        exp_eq(&4).got(4, None);
        exp_eq(&4).result("4".parse::<i32>());
        funcs::exp_near(&rec)(2.5, 1e-9).result("2.5".parse::<f64>());
        assert_eq!(rec.take().len(), 0);

        funcs::exp_near(&rec)(2.5, 1e-9).result("x".parse::<f64>());
        assert_eq!(rec.take().len(), 1);
    }

    #[test]
    fn borrowed_data_compares_through_owned_copies() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);
        let line = String::from("key=value");
        let (key, value) = line.split_once('=').expect("separator");

        m.eq("key".to_string(), key.to_string(), None);
        m.deq(b"value".to_vec(), value.as_bytes().to_vec(), None);
        m.exp_eq(String::from("value")).got(value.to_owned(), None);
        assert_eq!(rec.take().len(), 0);

        // A static literal is a different type from an owned String.
        m.eq("key", key.to_string(), None);
        assert_eq!(rec.take().len(), 2);
    }

    #[test]
    fn shared_reporter_across_threads() {
        let rec = Recorder::new();
        std::thread::scope(|s| {
            for i in 0..4 {
                let rec = &rec;
                s.spawn(move || Myt::new(rec).eq(i, -1, None));
            }
        });
        assert_eq!(rec.count(), 4);
    }
}

#[cfg(test)]
mod messages {
    use super::*;
    use predicates::prelude::*;

    fn contains(msg: &str, needle: &str) -> bool {
        predicate::str::contains(needle).eval(msg)
    }

    #[test]
    fn type_mismatch_adds_second_message() {
        let rec = Recorder::new();
        Myt::new(&rec).eq(1, "3", None);

        let msgs = rec.messages();
        assert_eq!(msgs.len(), 2);
        assert!(contains(&msgs[0], "Expected: 1, got: \"3\""));
        assert!(contains(&msgs[1], "Types of expected and got do not match!"));
        assert!(contains(&msgs[1], "exp type: i32, got type: &str"));
    }

    #[test]
    fn literal_defaults_are_flagged() {
        let rec = Recorder::new();
        Myt::new(&rec).eq(6, "mighty".len(), None);

        let msgs = rec.messages();
        assert_eq!(msgs.len(), 2);
        assert!(contains(&msgs[0], "Expected: 6, got: 6"));
        assert!(contains(&msgs[1], "got type: usize"));
    }

    #[test]
    fn cause_is_reported() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);
        m.neq(1, 2, Some(&TestError));
        m.near(1.0, 1.0, 1e-6, Some(&TestError));

        for msg in rec.messages() {
            assert!(contains(&msg, ", error: test error"), "{msg}");
        }
    }

    #[test]
    fn neq_layout() {
        let rec = Recorder::new();
        Myt::new(&rec).neq("a", "a", None);
        assert!(contains(&rec.messages()[0], "\n\tExpected mismatch: \"a\", got: \"a\""));
    }

    #[test]
    fn near_layout() {
        let rec = Recorder::new();
        Myt::new(&rec).near(1.0, 1.001, 1e-4, None);
        assert!(contains(
            &rec.messages()[0],
            "\n\tExpected: 1, got: 1.001, with eps: 0.0001"
        ));
    }

    #[test]
    fn deq_aligns_and_diffs() {
        let rec = Recorder::new();
        Myt::new(&rec).deq(vec![1, 2, 3], vec![1, 4, 3], None);

        let msg = &rec.messages()[0];
        assert!(contains(msg, ",\n\t     got: ["));
        assert!(contains(msg, "Diff (-expected +got):"));
        assert!(contains(msg, "\t-     2,"));
        assert!(contains(msg, "\t+     4,"));
    }

    #[test]
    fn result_error_has_no_value() {
        let rec = Recorder::new();
        Myt::new(&rec).exp_eq(7u8).result("x".parse::<u8>());

        let msgs = rec.messages();
        assert_eq!(msgs.len(), 1);
        assert!(contains(&msgs[0], "Expected: 7, got: <no value>, error: invalid digit"));
    }
}

#[cfg(test)]
mod attribution {
    use super::*;

    #[test]
    #[rustfmt::skip]
    fn failure_names_the_calling_test() {
        let rec = Recorder::test("attribution");
        let m = Myt::new(&rec);
        let line = line!(); m.eq(1, 2, None);

        let msg = &rec.messages()[0];
        assert!(msg.starts_with("Func: "), "{msg}");
        assert!(contains_fn(msg, "failure_names_the_calling_test"), "{msg}");
        assert!(msg.contains(&format!("File: myt_tests.rs:{line}\n")), "{msg}");
    }

    #[test]
    fn curried_and_factory_failures_name_the_test() {
        let rec = Recorder::new();
        let m = Myt::new(&rec);
        m.exp_eq(1).got(2, None);
        funcs::neq(&rec)(&1, &1, None);
        funcs::exp_deq(&rec)(&1).got(2, None);

        for msg in rec.messages() {
            assert!(
                contains_fn(&msg, "curried_and_factory_failures_name_the_test"),
                "{msg}"
            );
        }
    }

    #[test]
    fn deep_recursion_still_finds_caller() {
        fn dive(depth: usize, m: &Myt<&Recorder>) {
            if depth < 25 {
                dive(depth + 1, m);
            } else {
                m.eq(1, 2, None);
            }
        }

        let rec = Recorder::new();
        dive(0, &Myt::new(&rec));

        let msg = &rec.messages()[0];
        assert!(!msg.contains("<unknown_func>"), "{msg}");
        assert!(contains_fn(msg, "dive"), "{msg}");
        assert!(msg.contains("File: myt_tests.rs:"), "{msg}");
    }

    #[test]
    #[rustfmt::skip]
    fn caller_from_test_code() {
        let line = line!(); let caller = mighty::frame::caller();
        assert!(!caller.is_unknown());
        assert!(caller.function.contains("caller_from_test_code"));
        assert_eq!(caller.file, "myt_tests.rs");
        assert_eq!(caller.line, i64::from(line));
    }

    #[test]
    fn wrapper_reports_kind() {
        let rec = Recorder::bench("bench_sum");
        assert_eq!(Myt::new(&rec).kind(), RunKind::Benchmark);
    }

    fn contains_fn(msg: &str, name: &str) -> bool {
        msg.lines()
            .next()
            .is_some_and(|first| first.contains("myt_tests::") && first.contains(name))
    }
}
