#[cfg(test)]
mod tests {
    use crate::server::routes::{ReportParams, resolve_symbol};

    #[test]
    fn missing_symbol_falls_back_to_default() {
        let params = ReportParams::new(None);
        assert_eq!(resolve_symbol(&params), "INFY");
    }

    #[test]
    fn empty_symbol_falls_back_to_default() {
        let params = ReportParams::new(Some(String::new()));
        assert_eq!(resolve_symbol(&params), "INFY");
    }

    #[test]
    fn provided_symbol_is_used_verbatim() {
        let params = ReportParams::new(Some("AAPL".to_string()));
        assert_eq!(resolve_symbol(&params), "AAPL");
    }
}
