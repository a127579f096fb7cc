prelude! {
    repr::Person,
}

/// Detail formatting shared by every person variant.
///
/// [`describe`](Self::describe) composes the base [`Person`] line with
/// the variant's [`details_tail`](Self::details_tail), in that order.
/// Variants that do not fit the base-then-tail shape override
/// `describe` itself.
pub trait Describe {
    /// The shared base record.
    fn person(&self) -> &Person;

    /// Fields appended after the base details, if any.
    fn details_tail(&self) -> Option<String> {
        None
    }

    /// Full detail line for this variant.
    fn describe(&self) -> String {
        let mut details = self.person().details();
        if let Some(tail) = self.details_tail() {
            details.push_str(", ");
            details.push_str(&tail);
        }
        details
    }
}
