//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Fulfilment status of a placed order.
///
/// Orders progress strictly forward: Placed → Processing → Shipped →
/// Delivered. There is no cancellation state; an order that should not
/// ship simply stays in `Placed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// String form used in persisted blobs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// The next status in the fulfilment progression.
    ///
    /// `Delivered` is terminal and advances to itself.
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Placed => Self::Processing,
            Self::Processing => Self::Shipped,
            Self::Shipped | Self::Delivered => Self::Delivered,
        }
    }

    /// Whether the order has reached its terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            other => Err(OrderStatusParseError(other.to_owned())),
        }
    }
}

/// Error parsing an [`OrderStatus`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct OrderStatusParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_monotone_and_terminal() {
        let mut status = OrderStatus::Placed;
        status = status.advance();
        assert_eq!(status, OrderStatus::Processing);
        status = status.advance();
        assert_eq!(status, OrderStatus::Shipped);
        status = status.advance();
        assert_eq!(status, OrderStatus::Delivered);
        // Terminal: advancing again stays put.
        assert_eq!(status.advance(), OrderStatus::Delivered);
        assert!(status.is_terminal());
    }

    #[test]
    fn test_str_round_trip() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }
}
