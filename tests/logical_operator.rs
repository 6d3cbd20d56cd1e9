#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        and
        source: r#"
            print false and 1;
            print true and 1;
            print false and 2;
            print 1 and true;
            print 1 and 2 and 3;
            print true and (1 < 2);
            print true and false;
        "#,
        is OK
        "false",
        "1",
        "false",
        "true",
        "3",
        "true",
        "false"
    }

    tests! {
        and_truth
        source: r#"
            print false and "bad";
            print nil and "bad";
            print true and "ok";
            print 0 and "ok";
            print "" and "ok";
        "#,
        is OK
        "false",
        "nil",
        "ok",
        "ok",
        "ok"
    }

    tests! {
        or
        source: r#"
            print 1 or true;
            print false or 1;
            print false or false or true;
            print false or false or false;
        "#,
        is OK
        "1",
        "1",
        "true",
        "false"
    }

    tests! {
        or_truth
        source: r#"
            print false or "ok";
            print nil or "ok";
            print true or "ok";
            print 0 or "ok";
            print "s" or "ok";
        "#,
        is OK
        "ok",
        "ok",
        "true",
        "0",
        "s"
    }
}
