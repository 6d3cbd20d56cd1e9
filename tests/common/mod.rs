/// Runs inline Lox source through a fresh interpreter and asserts on the
/// captured output. Both arms run in-process: `is OK` checks stdout and
/// requires stderr to be empty, `is ERR` checks stderr and requires at
/// least one diagnostic to have been reported.
#[macro_export]
macro_rules! tests {
    ($name:ident source: $source:expr, is OK $($expected:expr),* $(,)?) => {
        #[test]
        fn $name() {
            use loxrs::Loxrs;

            let mut expected = vec![$($expected),*];
            let expected = match expected.len() {
                0 => String::new(),
                _ => {
                    expected.push("");
                    expected.join("\n")
                },
            };

            let mut stdout = Vec::new();
            let mut stderr = Vec::new();
            let mut loxrs = Loxrs::new(&mut stdout, &mut stderr);
            loxrs.run_source($source);

            drop(loxrs);
            assert_eq!(String::new(), String::from_utf8(stderr).unwrap(), "expected no diagnostics");
            assert_eq!(expected, String::from_utf8(stdout).unwrap());
        }
    };

    ($name:ident source: $source:expr, is ERR $($expected:expr),+ $(,)?) => {
        #[test]
        fn $name() {
            use loxrs::Loxrs;

            let expected = vec![$($expected),+].join("\n");

            let mut stdout = Vec::new();
            let mut stderr = Vec::new();
            let mut loxrs = Loxrs::new(&mut stdout, &mut stderr);
            loxrs.run_source($source);

            assert!(loxrs.had_error() || loxrs.had_runtime_error(), "expected a diagnostic to be reported");
            drop(loxrs);
            assert_eq!(expected, String::from_utf8(stderr).unwrap().trim_end());
        }
    };
}
