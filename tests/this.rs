#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        closure
        source: r#"
            class Foo {
                getClosure() {
                    fun closure() { return this.toString(); }
                    return closure;
                }
                toString() { return "Foo"; }
            }
            var closure = Foo().getClosure();
            print closure();
        "#,
        is OK
        "Foo"
    }

    tests! {
        nested_class
        source: r#"
            class Outer {
                method() {
                    print this;
                    fun f() {
                        print this;
                        class Inner {
                            method() { print this; }
                        }
                        Inner().method();
                    }
                    f();
                }
            }
            Outer().method();
        "#,
        is OK
        "Outer instance",
        "Outer instance",
        "Inner instance"
    }

    tests! {
        this_at_top_level
        source: "this;",
        is ERR
        "[line 1] Error at 'this': Can't use 'this' outside of a class."
    }

    tests! {
        this_in_method
        source: r#"
            class Foo {
                bar() { return this; }
                baz() { return this.bar().bar().toString(); }
                toString() { return "baz"; }
            }
            print Foo().baz();
        "#,
        is OK
        "baz"
    }

    tests! {
        this_in_top_level_function
        source: "fun foo() { this.bar(); }",
        is ERR
        "[line 1] Error at 'this': Can't use 'this' outside of a class."
    }
}
