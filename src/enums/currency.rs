use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Wallet currencies accepted by the `currency` query parameter. Prices in responses are
/// converted to this currency and given in its smallest unit.
#[derive(Debug, Serialize_repr, Deserialize_repr, IntoPrimitive, TryFromPrimitive, PartialEq, Eq, Clone, Copy)]
#[repr(u32)]
pub enum Currency {
    /// United States dollar.
    USD = 1,
    /// Pound sterling.
    GBP = 2,
    /// Euro.
    EUR = 3,
    /// Swiss franc.
    CHF = 4,
    /// Russian ruble.
    RUB = 5,
    /// Polish złoty.
    PLN = 6,
    /// Brazilian real.
    BRL = 7,
    /// Japanese yen.
    JPY = 8,
    /// Norwegian krone.
    NOK = 9,
    /// Indonesian rupiah.
    IDR = 10,
    /// Malaysian ringgit.
    MYR = 11,
    /// Philippine peso.
    PHP = 12,
    /// Singapore dollar.
    SGD = 13,
    /// Thai baht.
    THB = 14,
    /// Vietnamese đồng.
    VND = 15,
    /// South Korean won.
    KRW = 16,
    /// Turkish lira.
    TRY = 17,
    /// Ukrainian hryvnia.
    UAH = 18,
    /// Mexican peso.
    MXN = 19,
    /// Canadian dollar.
    CAD = 20,
    /// Australian dollar.
    AUD = 21,
    /// New Zealand dollar.
    NZD = 22,
    /// Chinese yuan.
    CNY = 23,
    /// Indian rupee.
    INR = 24,
    /// Chilean peso.
    CLP = 25,
    /// Peruvian sol.
    PEN = 26,
    /// Colombian peso.
    COP = 27,
    /// South African rand.
    ZAR = 28,
    /// Hong Kong dollar.
    HKD = 29,
    /// New Taiwan dollar.
    TWD = 30,
    /// Saudi riyal.
    SAR = 31,
    /// United Arab Emirates dirham.
    AED = 32,
    /// Argentine peso.
    ARS = 34,
    /// Israeli new shekel.
    ILS = 35,
    /// Kazakhstani tenge.
    KZT = 37,
    /// Kuwaiti dinar.
    KWD = 38,
    /// Qatari riyal.
    QAR = 39,
    /// Costa Rican colón.
    CRC = 40,
    /// Uruguayan peso.
    UYU = 41,
}

impl Currency {
    /// The numeric code sent to the market.
    pub fn code(&self) -> u32 {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_and_from_code() {
        assert_eq!(Currency::CNY.code(), 23);
        assert_eq!(Currency::try_from(3u32).unwrap(), Currency::EUR);
        assert!(Currency::try_from(33u32).is_err());
    }

    #[test]
    fn deserializes_from_number() {
        let currency: Currency = serde_json::from_str("1").unwrap();

        assert_eq!(currency, Currency::USD);
    }
}
