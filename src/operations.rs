//! Registry of the PayLane REST operations.
//!
//! Every operation exposed by the client is a fixed `(name, path, verb)` triple.
//! Paths and verbs are part of the wire contract with the PayLane server, so the
//! table lives in exactly one place: [`with_operation_table!`] feeds it to the
//! [`Operation`] enum here and to the generated methods on both clients.

use crate::errors::{PayLaneError, Result};
use std::fmt;
use std::str::FromStr;

/// HTTP verb used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl HttpVerb {
    /// Upper-case method token as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Put => "PUT",
            HttpVerb::Post => "POST",
            HttpVerb::Delete => "DELETE",
        }
    }

    /// Converts to the `reqwest` method type.
    pub fn to_method(self) -> reqwest::Method {
        match self {
            HttpVerb::Get => reqwest::Method::GET,
            HttpVerb::Put => reqwest::Method::PUT,
            HttpVerb::Post => reqwest::Method::POST,
            HttpVerb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpVerb {
    type Err = PayLaneError;

    /// Parses `get`, `put`, `post` or `delete`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpVerb::Get),
            "put" => Ok(HttpVerb::Put),
            "post" => Ok(HttpVerb::Post),
            "delete" => Ok(HttpVerb::Delete),
            _ => Err(PayLaneError::InvalidOperation(format!(
                "Not allowed request method type: {}",
                s
            ))),
        }
    }
}

/// Static description of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Logical name, e.g. `cardSale`
    pub name: &'static str,
    /// Path relative to the API base URL, e.g. `cards/sale`
    pub path: &'static str,
    /// HTTP verb
    pub verb: HttpVerb,
}

/// Invokes `$callback!` with the full operation table.
///
/// Each row is `(Variant, method_name, "apiName", "path", Verb, arity, "doc")`,
/// where `arity` is `params` for operations taking a parameter object and
/// `none` for those that always send `{}`.
macro_rules! with_operation_table {
    ($callback:ident) => {
        $callback! {
            (CardSale, card_sale, "cardSale", "cards/sale", Post, params,
                "Performs a card sale."),
            (CardSaleByToken, card_sale_by_token, "cardSaleByToken", "cards/saleByToken", Post, params,
                "Performs a card sale using a card token."),
            (CardAuthorization, card_authorization, "cardAuthorization", "cards/authorization", Post, params,
                "Authorizes an amount on a card."),
            (CardAuthorizationByToken, card_authorization_by_token, "cardAuthorizationByToken", "cards/authorizationByToken", Post, params,
                "Authorizes an amount on a card using a card token."),
            (PaypalAuthorization, paypal_authorization, "paypalAuthorization", "paypal/authorization", Post, params,
                "Authorizes a PayPal payment."),
            (CaptureAuthorization, capture_authorization, "captureAuthorization", "authorizations/capture", Post, params,
                "Captures funds from an earlier authorization."),
            (CloseAuthorization, close_authorization, "closeAuthorization", "authorizations/close", Post, params,
                "Closes an authorization so it can no longer be captured."),
            (Refund, refund, "refund", "refunds", Post, params,
                "Refunds a sale, fully or partially."),
            (GetSaleInfo, get_sale_info, "getSaleInfo", "sales/info", Get, params,
                "Fetches details of a sale."),
            (GetAuthorizationInfo, get_authorization_info, "getAuthorizationInfo", "authorizations/info", Get, params,
                "Fetches details of an authorization."),
            (CheckSaleStatus, check_sale_status, "checkSaleStatus", "sales/status", Get, params,
                "Checks the processing status of a sale."),
            (DirectDebitSale, direct_debit_sale, "directDebitSale", "directdebits/sale", Post, params,
                "Performs a direct debit sale."),
            (SofortSale, sofort_sale, "sofortSale", "sofort/sale", Post, params,
                "Performs a Sofort banking sale."),
            (IdealSale, ideal_sale, "idealSale", "ideal/sale", Post, params,
                "Performs an iDEAL sale."),
            (IdealBankCodes, ideal_bank_codes, "idealBankCodes", "ideal/bankcodes", Get, none,
                "Fetches the list of iDEAL bank codes."),
            (BankTransferSale, bank_transfer_sale, "bankTransferSale", "banktransfers/sale", Post, params,
                "Performs a bank transfer sale."),
            (PaypalSale, paypal_sale, "paypalSale", "paypal/sale", Post, params,
                "Performs a PayPal sale."),
            (PaypalStopRecurring, paypal_stop_recurring, "paypalStopRecurring", "paypal/stopRecurring", Post, params,
                "Stops a recurring PayPal profile."),
            (ResaleBySale, resale_by_sale, "resaleBySale", "resales/sale", Post, params,
                "Performs a resale based on an earlier sale."),
            (ResaleByAuthorization, resale_by_authorization, "resaleByAuthorization", "resales/authorization", Post, params,
                "Performs a resale based on an earlier authorization."),
            (CheckCard3DSecure, check_card_3d_secure, "checkCard3DSecure", "3DSecure/checkCard", Get, params,
                "Checks whether a card is enrolled in 3-D Secure."),
            (CheckCard3DSecureByToken, check_card_3d_secure_by_token, "checkCard3DSecureByToken", "3DSecure/checkCardByToken", Get, params,
                "Checks 3-D Secure enrollment using a card token."),
            (SaleBy3DSecureAuthorization, sale_by_3d_secure_authorization, "saleBy3DSecureAuthorization", "3DSecure/authSale", Post, params,
                "Performs a sale from a completed 3-D Secure authorization."),
            (CheckCard, check_card, "checkCard", "cards/check", Get, params,
                "Validates card data without charging it."),
            (CheckCardByToken, check_card_by_token, "checkCardByToken", "cards/checkByToken", Get, params,
                "Validates a card token without charging it."),
        }
    };
}

pub(crate) use with_operation_table;

macro_rules! define_operations {
    ($((
        $variant:ident,
        $method:ident,
        $name:literal,
        $path:literal,
        $verb:ident,
        $arity:ident,
        $doc:literal
    )),* $(,)?) => {
        /// A built-in PayLane operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl Operation {
            /// Every built-in operation, in registry order.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant),*];

            /// Logical API name, e.g. `cardSale`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }

            /// Path relative to the API base URL.
            pub fn path(self) -> &'static str {
                match self {
                    $(Operation::$variant => $path,)*
                }
            }

            /// HTTP verb.
            pub fn verb(self) -> HttpVerb {
                match self {
                    $(Operation::$variant => HttpVerb::$verb,)*
                }
            }
        }

        /// The full registry as plain data.
        pub static OPERATIONS: &[OperationSpec] = &[
            $(OperationSpec { name: $name, path: $path, verb: HttpVerb::$verb },)*
        ];
    };
}

with_operation_table!(define_operations);

impl Operation {
    /// Registry entry for this operation.
    pub fn spec(self) -> OperationSpec {
        OperationSpec {
            name: self.name(),
            path: self.path(),
            verb: self.verb(),
        }
    }

    /// Looks an operation up by its logical API name.
    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
