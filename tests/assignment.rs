#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        associativity
        source: "var a = \"a\"; var b = \"b\"; var c = \"c\"; a = b = c; print a; print b; print c;",
        is OK
        "c",
        "c",
        "c"
    }

    tests! {
        global
        source: "var a = \"before\"; print a; a = \"after\"; print a; print a = \"arg\"; print a;",
        is OK
        "before",
        "after",
        "arg",
        "arg"
    }

    tests! {
        grouping
        source: "var a = \"a\"; (a) = \"value\";",
        is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }

    tests! {
        infix_operator
        source: "var a = \"a\"; var b = \"b\"; a + b = \"value\";",
        is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }

    tests! {
        local
        source: "{ var a = \"before\"; print a; a = \"after\"; print a; print a = \"arg\"; print a; }",
        is OK
        "before",
        "after",
        "arg",
        "arg"
    }

    tests! {
        prefix_operator
        source: "var a = \"a\"; !a = \"value\";",
        is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }

    tests! {
        syntax
        source: "var a = \"before\"; var c = a = \"var\"; print a; print c;",
        is OK
        "var",
        "var"
    }

    tests! {
        to_this
        source: "class Foo { bar() { this = \"value\"; } }",
        is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }

    tests! {
        undefined
        source: "unknown = \"value\";",
        is ERR
        "Undefined variable 'unknown'.",
        "[line 1]"
    }
}
