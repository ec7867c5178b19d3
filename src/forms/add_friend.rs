use crate::friend::{Friend, FriendId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn label(&self) -> &'static str {
        match self {
            AddFriendField::Name => "Friend name",
            AddFriendField::Image => "Image URL",
        }
    }

    pub fn next(&self) -> AddFriendField {
        match self {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        }
    }
}

/// Draft for a new friend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFriendDraft {
    pub name: String,
    pub image: String,
    pub field: AddFriendField,
    default_image: String,
}

impl AddFriendDraft {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            field: AddFriendField::default(),
            default_image,
        }
    }

    pub fn current_mut(&mut self) -> &mut String {
        match self.field {
            AddFriendField::Name => &mut self.name,
            AddFriendField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.current_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.current_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
        self.field = AddFriendField::default();
    }

    /// Build the new friend, or `None` if the name or image is empty.
    ///
    /// On success the draft goes back to its defaults. The id is appended to
    /// the image URL so friends left on the placeholder avatar still get
    /// distinct pictures.
    pub fn submit(&mut self) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            return None;
        }

        let id = FriendId::generate();
        let friend = Friend::new(id, &self.name, format!("{}?={id}", self.image), 0.0);
        self.reset();
        Some(friend)
    }
}
