#[macro_use]
mod common;

#[cfg(test)]
mod r#for {
    tests! {
        class_in_body
        source: "for (;;) class Foo {}",
        is ERR
        "[line 1] Error at 'class': Expect expression."
    }

    tests! {
        fun_in_body
        source: "for (;;) fun foo() {}",
        is ERR
        "[line 1] Error at 'fun': Expect expression."
    }

    tests! {
        closure_in_body
        source: r#"
            var fns = "";
            fun makeClosures() {
                var list = nil;
                for (var i = 1; i < 4; i = i + 1) {
                    var j = i;
                    fun closure() { print j; }
                    if (i == 1) { closure(); }
                    if (i == 2) { closure(); }
                    if (i == 3) { closure(); }
                }
            }
            makeClosures();
        "#,
        is OK
        "1",
        "2",
        "3"
    }

    tests! {
        return_inside
        source: r#"
            fun f() {
                for (;;) {
                    var i = "i";
                    return i;
                }
            }
            print f();
        "#,
        is OK
        "i"
    }

    tests! {
        var_in_body
        source: "for (;;) var foo;",
        is ERR
        "[line 1] Error at 'var': Expect expression."
    }
}
