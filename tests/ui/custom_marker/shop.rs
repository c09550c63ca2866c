//@compile-flags: --crate-name shop
//@compile-flags: --crate-type lib

pub mod model {
    pub struct Item {
        pub sku: String,
        #[layout::loose]
        pub label: String,
        pub qty: u32,
    }

    pub struct Draft {
        pub a: u8,
        pub b: u8,
    }
}

pub struct Outside {
    pub a: u8,
    pub b: u8,
}

pub fn build() {
    let _ = model::Item { label: String::new(), sku: String::new(), qty: 1 };
    let _ = model::Item { qty: 1, sku: String::new(), label: String::new() }; //~ ERROR: fields of `shop::model::Item` are not written in declaration order
    let _ = model::Draft { b: 1, a: 2 };
    let _ = Outside { b: 1, a: 2 };
}
