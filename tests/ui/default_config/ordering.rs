//@compile-flags: --crate-name ordering
//@compile-flags: --crate-type lib

#[derive(Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

pub fn in_order() -> Point {
    Point { x: 1, y: 2, z: 3 }
}

pub fn swapped() -> Point {
    Point { y: 2, x: 1, z: 3 } //~ WARN: fields of `ordering::Point` are not written in declaration order
    //~^ HELP: expected order: x, y, z
}

pub fn reversed() -> Point {
    Point {
        z: 3,
        y: 2, //~ WARN: fields of `ordering::Point` are not written in declaration order
        //~^ HELP: expected order: x, y, z
        x: 1,
    }
}

pub fn omitted_fields() -> Point {
    Point { x: 1, z: 3, ..Default::default() }
}

pub fn omitted_fields_out_of_order() -> Point {
    Point { z: 3, x: 1, ..Default::default() } //~ WARN: not written in declaration order
    //~^ HELP: expected order: x, z
}

pub fn only_base() -> Point {
    Point { ..Default::default() }
}

pub fn shorthand() -> Point {
    let (x, y, z) = (1, 2, 3);
    let _ = Point { x, y, z };
    Point { y, x, z } //~ WARN: not written in declaration order
    //~^ HELP: expected order: x, y, z
}

pub fn from_base(base: Point) -> Point {
    Point { z: 0, y: 1, ..base } //~ WARN: not written in declaration order
    //~^ HELP: expected order: y, z
}

impl Point {
    pub fn origin() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }

    pub fn flipped() -> Self {
        Self { z: 0, x: 0, y: 0 } //~ WARN: fields of `ordering::Point` are not written in declaration order
        //~^ HELP: expected order: x, y, z
    }
}

pub type Alias = Point;

pub fn through_alias() -> Alias {
    Alias { y: 1, x: 0, z: 2 } //~ WARN: fields of `ordering::Point` are not written in declaration order
    //~^ HELP: expected order: x, y, z
}

pub fn local_struct() {
    struct Local {
        a: u8,
        b: u8,
    }

    let _ = Local { a: 1, b: 2 };
    let _ = Local { b: 2, a: 1 }; //~ WARN: fields of `ordering::local_struct::Local` are not written in declaration order
    //~^ HELP: expected order: a, b
}
