//! Supported currency symbols

use std::collections::HashSet;

/// Currency codes published by the Fixer API.
pub const FIXER_SYMBOLS: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTC", "BTN", "BWP", "BYN", "BYR",
    "BZD", "CAD", "CDF", "CHF", "CLF", "CLP", "CNY", "COP", "CRC", "CUC", "CUP", "CVE", "CZK",
    "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GGP",
    "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD", "HNL", "HRK", "HTG", "HUF", "IDR", "ILS",
    "IMP", "INR", "IQD", "IRR", "ISK", "JEP", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF",
    "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LTL", "LVL", "LYD",
    "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRO", "MUR", "MVR", "MWK", "MXN", "MYR",
    "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN", "PGK", "PHP", "PKR",
    "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD",
    "SHP", "SLL", "SOS", "SRD", "STD", "SVC", "SYP", "SZL", "THB", "TJS", "TMT", "TND", "TOP",
    "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS", "VEF", "VND", "VUV", "WST",
    "XAF", "XAG", "XAU", "XCD", "XDR", "XOF", "XPF", "YER", "ZAR", "ZMK", "ZMW", "ZWL",
];

pub trait SymbolTable: Send + Sync {
    /// True if `code` is a supported currency, ignoring case.
    fn is_valid(&self, code: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct Symbols {
    codes: HashSet<String>,
}

impl Symbols {
    pub fn fixer() -> Self {
        Self::from_codes(FIXER_SYMBOLS.iter().copied())
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Symbols {
            codes: codes
                .into_iter()
                .map(|c| c.as_ref().to_uppercase())
                .collect(),
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::fixer()
    }
}

impl SymbolTable for Symbols {
    fn is_valid(&self, code: &str) -> bool {
        self.codes.contains(&code.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols_any_case() {
        let symbols = Symbols::fixer();
        assert!(symbols.is_valid("USD"));
        assert!(symbols.is_valid("usd"));
        assert!(symbols.is_valid("Usd"));
        assert!(symbols.is_valid("GBP"));
        assert!(symbols.is_valid("EUR"));
    }

    #[test]
    fn test_unknown_symbols() {
        let symbols = Symbols::fixer();
        assert!(!symbols.is_valid("ABC"));
        assert!(!symbols.is_valid("XYZ"));
        assert!(!symbols.is_valid(""));
        assert!(!symbols.is_valid("US"));
        assert!(!symbols.is_valid("USDX"));
    }

    #[test]
    fn test_custom_table() {
        let symbols = Symbols::from_codes(["aaa", "BBB"]);
        assert!(symbols.is_valid("AAA"));
        assert!(symbols.is_valid("bbb"));
        assert!(!symbols.is_valid("USD"));
    }
}
