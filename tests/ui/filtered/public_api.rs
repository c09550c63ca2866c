//@compile-flags: --crate-name public_api
//@compile-flags: --crate-type lib

pub struct Request {
    pub method: String,
    internal_id: u64,
    pub path: String,
    retries: u8,
}

pub fn private_fields_go_anywhere() -> Request {
    Request { retries: 0, method: String::new(), path: String::new(), internal_id: 1 }
}

pub fn public_fields_swapped() -> Request {
    Request {
        internal_id: 1,
        path: String::new(),
        retries: 0,
        method: String::new(), //~ ERROR: fields of `public_api::Request` are not written in declaration order
        //~^ HELP: expected order: method, path
    }
}

pub struct Settings {
    pub(crate) cache: bool,
    pub name: String,
    pub(crate) depth: u8,
}

pub fn crate_visible_fields_are_not_exported() -> Settings {
    Settings { depth: 1, name: String::new(), cache: true }
}
