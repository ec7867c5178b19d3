use crate::friend::FriendId;

/// Who paid the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggle(&self) -> Payer {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBillField {
    #[default]
    Bill,
    UserExpense,
    Payer,
}

impl SplitBillField {
    pub fn label(&self) -> &'static str {
        match self {
            SplitBillField::Bill => "Bill value",
            SplitBillField::UserExpense => "Your expense",
            SplitBillField::Payer => "Who is paying the bill?",
        }
    }

    pub fn next(&self) -> SplitBillField {
        match self {
            SplitBillField::Bill => SplitBillField::UserExpense,
            SplitBillField::UserExpense => SplitBillField::Payer,
            SplitBillField::Payer => SplitBillField::Bill,
        }
    }

    pub fn prev(&self) -> SplitBillField {
        match self {
            SplitBillField::Bill => SplitBillField::Payer,
            SplitBillField::UserExpense => SplitBillField::Bill,
            SplitBillField::Payer => SplitBillField::UserExpense,
        }
    }
}

/// Draft for splitting one bill with one friend.
///
/// A draft belongs to exactly one friend; the controller builds a fresh one
/// whenever the selection moves to someone else.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBillDraft {
    friend_id: FriendId,
    bill: String,
    paid_by_user: String,
    pub payer: Payer,
    pub field: SplitBillField,
}

/// Empty, or a non-negative decimal made of digits and at most one dot.
/// A lone "." is accepted while typing and counts as 0.
fn is_amount_text(text: &str) -> bool {
    text.is_empty()
        || text == "."
        || (text.chars().all(|c| c.is_ascii_digit() || c == '.')
            && text.parse::<f64>().is_ok_and(|v| v.is_finite()))
}

fn amount_of(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

impl SplitBillDraft {
    pub fn new(friend_id: FriendId) -> Self {
        Self {
            friend_id,
            bill: String::new(),
            paid_by_user: String::new(),
            payer: Payer::default(),
            field: SplitBillField::default(),
        }
    }

    pub fn friend_id(&self) -> FriendId {
        self.friend_id
    }

    pub fn bill_text(&self) -> &str {
        &self.bill
    }

    pub fn paid_by_user_text(&self) -> &str {
        &self.paid_by_user
    }

    pub fn bill(&self) -> f64 {
        amount_of(&self.bill)
    }

    pub fn paid_by_user(&self) -> f64 {
        amount_of(&self.paid_by_user)
    }

    /// The friend's part of the bill. Zero until a bill is entered.
    pub fn paid_by_friend(&self) -> f64 {
        if self.bill.is_empty() {
            0.0
        } else {
            self.bill() - self.paid_by_user()
        }
    }

    /// Returns false (keeping the old value) for non-numeric text.
    pub fn set_bill(&mut self, text: &str) -> bool {
        if !is_amount_text(text) {
            return false;
        }
        self.bill = text.to_string();
        true
    }

    /// Returns false (keeping the old value) for non-numeric text or an
    /// expense above the current bill.
    pub fn set_paid_by_user(&mut self, text: &str) -> bool {
        if !is_amount_text(text) || amount_of(text) > self.bill() {
            return false;
        }
        self.paid_by_user = text.to_string();
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        match self.field {
            SplitBillField::Bill => {
                let candidate = format!("{}{}", self.bill, c);
                self.set_bill(&candidate)
            }
            SplitBillField::UserExpense => {
                let candidate = format!("{}{}", self.paid_by_user, c);
                self.set_paid_by_user(&candidate)
            }
            SplitBillField::Payer => false,
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            SplitBillField::Bill => {
                self.bill.pop();
            }
            SplitBillField::UserExpense => {
                self.paid_by_user.pop();
            }
            SplitBillField::Payer => {}
        }
    }

    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// The signed change to the friend's balance, or `None` while the bill or
    /// the user's expense is still empty or zero.
    ///
    /// User paid: the balance grows by the user's expense. Friend paid: the
    /// balance drops by the friend's own share.
    pub fn submit(&self) -> Option<f64> {
        let bill = self.bill();
        let paid_by_user = self.paid_by_user();
        if bill == 0.0 || paid_by_user == 0.0 {
            return None;
        }

        Some(match self.payer {
            Payer::User => paid_by_user,
            Payer::Friend => -self.paid_by_friend(),
        })
    }
}
