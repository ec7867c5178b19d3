//! Friends and their running balances.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a friend.
///
/// Seed data uses small numeric ids; friends created from the add form get a
/// random v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FriendId {
    Seed(u32),
    Generated(Uuid),
}

impl FriendId {
    pub fn generate() -> Self {
        Self::Generated(Uuid::new_v4())
    }

    pub fn short(&self) -> String {
        match self {
            Self::Seed(n) => n.to_string(),
            Self::Generated(uuid) => uuid.to_string()[..8].to_string(),
        }
    }
}

impl std::fmt::Display for FriendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seed(n) => write!(f, "{}", n),
            Self::Generated(uuid) => write!(f, "{}", uuid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    /// Negative: I owe this friend. Positive: this friend owes me.
    pub balance: f64,
}

impl Friend {
    pub fn new(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// Copy of this friend with `delta` added to the balance.
    pub fn with_balance_delta(&self, delta: f64) -> Self {
        Self {
            balance: self.balance + delta,
            ..self.clone()
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }
}

/// The three friends every session starts with.
pub fn initial_friends() -> Vec<Friend> {
    [(118836, "Clark", -7.0), (933372, "Sarah", 20.0), (499476, "Anthony", 0.0)]
        .into_iter()
        .map(|(id, name, balance)| {
            Friend::new(
                FriendId::Seed(id),
                name,
                format!("https://i.pravatar.cc/48?u={id}"),
                balance,
            )
        })
        .collect()
}

/// Who owes whom, derived from the sign of a balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// I owe the friend this (positive) amount.
    YouOwe(f64),
    /// The friend owes me this (positive) amount.
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            Self::YouOwe(balance.abs())
        } else if balance > 0.0 {
            Self::OwesYou(balance)
        } else {
            Self::Even
        }
    }

    pub fn message(&self, name: &str, currency: &str) -> String {
        match self {
            Self::YouOwe(amount) => {
                format!("You owe {} {}{}", name, format_amount(*amount), currency)
            }
            Self::OwesYou(amount) => {
                format!("{} owes you {}{}", name, format_amount(*amount), currency)
            }
            Self::Even => format!("You and {} are even", name),
        }
    }
}

/// Render an amount with at most two decimals and no trailing zeros.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
