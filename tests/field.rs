#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        call_function_field
        source: r#"
            class Foo {}
            fun bar(a, b) { print "bar"; print a; print b; }
            var foo = Foo();
            foo.bar = bar;
            foo.bar(1, 2);
        "#,
        is OK
        "bar",
        "1",
        "2"
    }

    tests! {
        call_nonfunction_field
        source: r#"
            class Foo {}
            var foo = Foo();
            foo.bar = "not a function";
            foo.bar();
        "#,
        is ERR
        "Can only call functions and classes.",
        "[line 5]"
    }

    tests! {
        get_and_set_method
        source: r#"
            class Foo {
                method(a) {
                    print "method";
                    print a;
                }
            }
            var foo = Foo();
            var method = foo.method;
            method(1);
            foo.method(2);
        "#,
        is OK
        "method",
        "1",
        "method",
        "2"
    }

    tests! {
        get_on_bool
        source: "true.foo;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        get_on_class
        source: "class Foo {} Foo.bar;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        get_on_function
        source: "fun foo() {} foo.bar;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        get_on_nil
        source: "nil.foo;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        get_on_num
        source: "123.foo;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        get_on_string
        source: "\"str\".foo;",
        is ERR
        "Only instances have properties.",
        "[line 1]"
    }

    tests! {
        many
        source: r#"
            class Foo {}
            var foo = Foo();
            foo.apple = "apple";
            foo.banana = "banana";
            foo.cherry = "cherry";
            print foo.apple;
            print foo.banana;
            print foo.cherry;
        "#,
        is OK
        "apple",
        "banana",
        "cherry"
    }

    tests! {
        method
        source: r#"
            class Foo {
                method(arg) {
                    print "got method";
                    print arg;
                }
            }
            Foo().method("arg");
        "#,
        is OK
        "got method",
        "arg"
    }

    tests! {
        method_binds_this
        source: r#"
            class Foo {
                sayName() { print this.name; }
            }
            var foo1 = Foo();
            foo1.name = "foo1";
            var method = foo1.sayName;
            method();
        "#,
        is OK
        "foo1"
    }

    tests! {
        on_instance
        source: r#"
            class Foo {}
            var foo = Foo();
            foo.bar = "bar value";
            foo.baz = "baz value";
            print foo.bar;
            print foo.baz;
        "#,
        is OK
        "bar value",
        "baz value"
    }

    tests! {
        set_on_bool
        source: "true.foo = \"value\";",
        is ERR
        "Only instances have fields.",
        "[line 1]"
    }

    tests! {
        set_on_class
        source: "class Foo {} Foo.bar = \"value\";",
        is ERR
        "Only instances have fields.",
        "[line 1]"
    }

    tests! {
        set_on_function
        source: "fun foo() {} foo.bar = \"value\";",
        is ERR
        "Only instances have fields.",
        "[line 1]"
    }

    tests! {
        set_on_nil
        source: "nil.foo = \"value\";",
        is ERR
        "Only instances have fields.",
        "[line 1]"
    }

    tests! {
        undefined
        source: r#"
            class Foo {}
            var foo = Foo();
            foo.bar;
        "#,
        is ERR
        "Undefined property 'bar'.",
        "[line 4]"
    }
}
