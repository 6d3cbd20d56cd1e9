#[macro_use]
mod common;

#[cfg(test)]
mod block {
    tests! {
        empty
        source: "{} print \"ok\";",
        is OK
        "ok"
    }

    tests! {
        scope
        source: "var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
        is OK
        "inner",
        "outer"
    }
}
