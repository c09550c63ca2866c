//@compile-flags: --crate-name macros
//@compile-flags: --crate-type lib

pub struct Config {
    pub host: String,
    pub port: u16,
}

macro_rules! local_config {
    () => {
        Config { port: 8080, host: String::from("localhost") }
    };
}

macro_rules! boxed {
    ($e:expr) => {
        Box::new($e)
    };
}

pub fn written_by_a_macro() -> Config {
    local_config!()
}

pub fn passed_through_a_macro() -> Box<Config> {
    boxed!(Config { port: 1, host: String::new() }) //~ WARN: fields of `macros::Config` are not written in declaration order
}
