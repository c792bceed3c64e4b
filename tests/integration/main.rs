mod cli_config;
mod cli_list;
mod common;
