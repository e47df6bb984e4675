fn main() {
    multiversx_sc_meta_lib::cli_main::<votes_token::AbiProvider>();
}
