//@compile-flags: --crate-name variants
//@compile-flags: --crate-type lib

pub enum Event {
    Created,
    Shipped { id: u32, carrier: String, tracking: Option<String> },
    Cancelled(u32),
}

pub fn shipped_in_order() -> Event {
    Event::Shipped { id: 1, carrier: String::new(), tracking: None }
}

pub fn shipped_out_of_order() -> Event {
    Event::Shipped { carrier: String::new(), id: 2, tracking: None } //~ WARN: fields of `variants::Event::Shipped` are not written in declaration order
}

pub fn other_variants() -> (Event, Event) {
    (Event::Created, Event::Cancelled(3))
}

pub struct Pair(pub u8, pub u8);

pub fn positional() -> Pair {
    Pair(1, 2)
}

pub fn tuple_keys_in_order() -> Pair {
    Pair { 0: 1, 1: 2 }
}

pub fn tuple_keys_out_of_order() -> Pair {
    Pair { 1: 2, 0: 1 } //~ WARN: fields of `variants::Pair` are not written in declaration order
}

pub struct Unit {}

pub fn empty_literal() -> Unit {
    Unit {}
}

pub union Bits {
    pub int: u32,
    pub float: f32,
}

pub fn union_literal() -> Bits {
    Bits { float: 1.0 }
}

pub fn foreign_type() -> std::ops::Range<u32> {
    std::ops::Range { end: 2, start: 1 } //~ WARN: fields of `core::ops::range::Range` are not written in declaration order
}
