pub type CmdResult<T> = wp_rebrand::Result<(T, i32)>;

pub mod rebrand;
