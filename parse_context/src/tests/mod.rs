#[cfg(test)]
mod common;
#[cfg(test)]
mod test_mode;
#[cfg(test)]
mod test_path;
