#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        arguments
        source: r#"
            class Foo {
                init(a, b) {
                    print "init";
                    this.a = a;
                    this.b = b;
                }
            }
            var foo = Foo(1, 2);
            print foo.a;
            print foo.b;
        "#,
        is OK
        "init",
        "1",
        "2"
    }

    tests! {
        call_init_explicitly
        source: r#"
            class Foo {
                init() { print "Foo.init()"; }
            }
            var foo = Foo();
            foo.init();
        "#,
        is OK
        "Foo.init()",
        "Foo.init()"
    }

    tests! {
        default
        source: r#"
            class Foo {}
            var foo = Foo();
            print foo;
        "#,
        is OK
        "Foo instance"
    }

    tests! {
        default_arguments
        source: r#"
            class Foo {}
            var foo = Foo(1, 2, 3);
        "#,
        is ERR
        "Expected 0 arguments but got 3.",
        "[line 3]"
    }

    tests! {
        early_return
        source: r#"
            class Foo {
                init() {
                    print "init";
                    return;
                    print "unreachable";
                }
            }
            print Foo();
        "#,
        is OK
        "init",
        "Foo instance"
    }

    tests! {
        extra_arguments
        source: r#"
            class Foo {
                init(a, b) { this.a = a; this.b = b; }
            }
            var foo = Foo(1, 2, 3, 4);
        "#,
        is ERR
        "Expected 2 arguments but got 4.",
        "[line 5]"
    }

    tests! {
        init_not_method
        source: r#"
            class Foo {
                init(arg) { print "Foo.init(" + arg + ")"; }
            }
            fun init() { print "not initializer"; }
            init();
        "#,
        is OK
        "not initializer"
    }

    tests! {
        missing_arguments
        source: r#"
            class Foo {
                init(a, b) {}
            }
            var foo = Foo(1);
        "#,
        is ERR
        "Expected 2 arguments but got 1.",
        "[line 5]"
    }

    tests! {
        return_value
        source: r#"
            class Foo {
                init() { return "value"; }
            }
        "#,
        is ERR
        "[line 3] Error at 'return': Can't return a value from an initializer."
    }
}
