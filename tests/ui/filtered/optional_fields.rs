//@compile-flags: --crate-name optional_fields
//@compile-flags: --crate-type lib

pub struct Order {
    pub id: u64,
    #[structfieldorder::optional]
    pub note: Option<String>,
    pub total: u32,
    #[cfg_attr(structfieldorder, structfieldorder::optional)]
    pub coupon: Option<String>,
}

pub fn optional_fields_go_anywhere() -> Order {
    Order { note: None, id: 1, coupon: None, total: 2 }
}

pub fn required_fields_swapped() -> Order {
    Order {
        total: 2,
        note: None,
        id: 1, //~ WARN: fields of `optional_fields::Order` are not written in declaration order
        coupon: None,
    }
}

pub struct Strict {
    pub a: u8,
    #[structfieldorder::optionally]
    pub b: u8,
}

pub fn near_miss_marker_still_counts() -> Strict {
    Strict { b: 1, a: 2 } //~ WARN: fields of `optional_fields::Strict` are not written in declaration order
}
