#[macro_use]
mod common;

#[cfg(test)]
mod r#return {
    tests! {
        after_else
        source: r#"
            fun f() {
                if (false) "no"; else return "ok";
            }
            print f();
        "#,
        is OK
        "ok"
    }

    tests! {
        after_if
        source: r#"
            fun f() {
                if (true) return "ok";
            }
            print f();
        "#,
        is OK
        "ok"
    }

    tests! {
        after_while
        source: r#"
            fun f() {
                while (true) return "ok";
            }
            print f();
        "#,
        is OK
        "ok"
    }

    tests! {
        at_top_level
        source: "return \"no\";",
        is ERR
        "[line 1] Error at 'return': Can't return from top-level code."
    }

    tests! {
        in_function
        source: r#"
            fun f() {
                print "before";
                return;
                print "after";
            }
            f();
        "#,
        is OK
        "before"
    }

    tests! {
        in_method
        source: r#"
            class Foo {
                method() {
                    print "before";
                    return;
                    print "after";
                }
            }
            Foo().method();
        "#,
        is OK
        "before"
    }

    tests! {
        return_nil_if_no_value
        source: r#"
            fun f() { return; }
            print f();
        "#,
        is OK
        "nil"
    }
}
