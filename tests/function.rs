#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        body_must_be_block
        source: "fun f() 123;",
        is ERR
        "[line 1] Error at '123': Expect '{' before function body."
    }

    tests! {
        empty_body
        source: "fun f() {} print f();",
        is OK
        "nil"
    }

    tests! {
        extra_arguments
        source: "fun f(a, b) { return a + b; } f(1, 2, 3, 4);",
        is ERR
        "Expected 2 arguments but got 4.",
        "[line 1]"
    }

    tests! {
        missing_arguments
        source: "fun f(a, b) { return a + b; } f(1);",
        is ERR
        "Expected 2 arguments but got 1.",
        "[line 1]"
    }

    tests! {
        missing_comma_in_parameters
        source: "fun f(a, b c) {}",
        is ERR
        "[line 1] Error at 'c': Expect ')' after parameters."
    }

    tests! {
        mutual_recursion
        source: r#"
            fun isEven(n) {
                if (n == 0) return true;
                return isOdd(n - 1);
            }
            fun isOdd(n) {
                if (n == 0) return false;
                return isEven(n - 1);
            }
            print isEven(4);
            print isOdd(3);
        "#,
        is OK
        "true",
        "true"
    }

    tests! {
        nested_call_with_arguments
        source: r#"
            fun returnArg(arg) { return arg; }
            fun returnFunCallWithArg(func, arg) { return returnArg(func)(arg); }
            fun printArg(arg) { print arg; }
            returnFunCallWithArg(printArg, "hello world");
        "#,
        is OK
        "hello world"
    }

    tests! {
        parameters
        source: r#"
            fun f0() { return 0; }
            fun f1(a) { return a; }
            fun f2(a, b) { return a + b; }
            print f0();
            print f1(1);
            print f2(1, 2);
        "#,
        is OK
        "0",
        "1",
        "3"
    }

    tests! {
        print
        source: r#"
            fun foo() {}
            print foo;
            print clock;
        "#,
        is OK
        "<fn foo>",
        "<native fn>"
    }

    tests! {
        recursion
        source: r#"
            fun fib(n) {
                if (n < 2) return n;
                return fib(n - 1) + fib(n - 2);
            }
            print fib(8);
        "#,
        is OK
        "21"
    }

    tests! {
        too_many_arguments
        source: &format!("fun f() {{}} f({});", (0..256).map(|n| n.to_string()).collect::<Vec<_>>().join(", ")),
        is ERR
        "[line 1] Error at '255': Can't have more than 255 arguments."
    }

    tests! {
        too_many_parameters
        source: &format!("fun f({}) {{}}", (0..256).map(|n| format!("a{n}")).collect::<Vec<_>>().join(", ")),
        is ERR
        "[line 1] Error at 'a255': Can't have more than 255 parameters."
    }
}
