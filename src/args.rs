use std::ffi::OsString;

use crate::{Error, Result};

/// Checks the command line, excluding the program name. The generator takes no arguments, so any
/// argument at all, including `--` and anything that looks like an option, is rejected.
///
/// # Example
/// ```
/// # use isaac_stream::check_args;
/// assert!(check_args(Vec::<String>::new()).is_ok());
/// assert!(check_args(["--help"]).unwrap_err().is_usage());
/// ```
pub fn check_args<I>(args: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    match args.into_iter().next() {
        Some(arg) => Err(Error::UnexpectedArgument(
            arg.into().to_string_lossy().into_owned(),
        )),
        None => Ok(()),
    }
}
