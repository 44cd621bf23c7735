#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod live_chain_tests;
