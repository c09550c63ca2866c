//@compile-flags: --crate-name stacked
//@compile-flags: --crate-type lib

pub struct Settings {
    pub verbose: bool,
    pub level: u8,
}

pub struct Other {
    pub first: u8,
    pub second: u8,
}

pub fn settings() -> Settings {
    Settings { level: 1, verbose: true } //~ WARN: fields of `stacked::Settings` are not written in declaration order
    //~^ ERROR: fields of `stacked::Settings` are not written in declaration order
}

pub fn other() -> Other {
    Other { second: 2, first: 1 } //~ WARN: fields of `stacked::Other` are not written in declaration order
}
