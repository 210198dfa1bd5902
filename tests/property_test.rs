mod common;
use basic::lang::{charset, lex, Int, Line};
use basic::mach::{Operation, Runtime};
use common::*;
use proptest::prelude::*;

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..10000, 0..10000).prop_map(|(a, b)| format!("PRINT {};{}", a, b)),
        (1..10000).prop_map(|n| format!("GOTO {}", n)),
        ("[A-Z]", 0..500, 0..500).prop_map(|(v, a, b)| format!("LET {}={}*{}", v, a, b)),
        ("[A-Z]", 0..100, "[A-Z ]{0,8}")
            .prop_map(|(v, a, s)| format!("IF {}<{} THEN PRINT \"{}\"", v, a, s)),
        ("[A-Z]", 0..20).prop_map(|(v, n)| format!("FOR {}=1 TO {}", v, n)),
    ]
}

proptest! {
    #[test]
    fn sum_matches_checked_add(a in any::<Int>(), b in any::<Int>()) {
        prop_assert_eq!(Operation::sum(a, b).ok(), a.checked_add(b));
    }

    #[test]
    fn subtract_matches_checked_sub(a in any::<Int>(), b in any::<Int>()) {
        prop_assert_eq!(Operation::subtract(a, b).ok(), a.checked_sub(b));
    }

    #[test]
    fn multiply_matches_checked_mul(a in any::<Int>(), b in any::<Int>()) {
        prop_assert_eq!(Operation::multiply(a, b).ok(), a.checked_mul(b));
    }

    #[test]
    fn numbers_read_back_as_written(n in any::<Int>()) {
        prop_assert_eq!(charset::parse_number(&charset::format_number(n)), Some(n));
    }

    #[test]
    fn listing_crunches_to_the_same_line(number in 1u16..10000, body in statement()) {
        let line = Line::new(&format!("{} {}", number, body));
        prop_assert_eq!(line.number(), number);
        let again = Line::new(&line.to_string());
        prop_assert_eq!(again, line);
    }

    #[test]
    fn lexing_printable_text_never_panics(s in "[ -~]{0,64}") {
        let _ = lex(&s);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn printed_arithmetic_matches_rust(a in -100..100, b in -100..100, c in -100..100) {
        let mut r = Runtime::default();
        let line = format!("PRINT {}+{}*{}", a, b, c);
        prop_assert!(r.enter(&line));
        prop_assert_eq!(exec(&mut r), format!("{}\n0/0\n", a + b * c));
    }
}
