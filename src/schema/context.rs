/// The `SchemaContext` carries an arena that a [Schema](super::Schema) and all of its types are
/// allocated onto.
///
/// A schema borrows from its context, so the context must outlive any schema built with it.
/// Dropping the context frees all of its types at once.
///
/// The arena never runs `Drop` for the values put onto it. Heap memory owned by an allocated
/// value, such as a `String` passed to [`SchemaContext::alloc_string`] or the text and segments
/// of a [DurationType](crate::scalar::DurationType) with a custom pattern, is hence leaked when
/// the context is dropped. The named patterns own no heap memory and don't leak. Contexts with
/// custom patterns should therefore be created once and kept, rather than per request.
pub struct SchemaContext {
    /// An arena allocator that holds the memory allocated for the Schema Context's lifetime
    pub arena: bumpalo::Bump,
}

impl SchemaContext {
    /// Create a new Schema context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        SchemaContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful for type and field names whose lifetime is shorter than the schema's.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this Schema context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_names() {
        let ctx = SchemaContext::new();
        let name = {
            let owned = format!("{}{}", "Dur", "ation");
            ctx.alloc_str(&owned)
        };
        assert_eq!(name, "Duration");
        assert_eq!(ctx.alloc_string(String::from("Query")), "Query");
        assert_eq!(*ctx.alloc(3), 3);
    }
}
