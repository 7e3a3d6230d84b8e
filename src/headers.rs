use indexmap::IndexMap;

/// Response headers in the order the filter emitted them.
pub type Headers = IndexMap<String, String>;

/// Writable response-header destination.
///
/// `set_header` has replace semantics: a later call for the same name wins.
/// Framework adapters implement this for their own header maps.
pub trait HeaderSink {
    fn set_header(&mut self, name: &'static str, value: &str);
}

impl HeaderSink for Headers {
    fn set_header(&mut self, name: &'static str, value: &str) {
        let existing = self
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name));

        match existing {
            Some(index) => {
                if let Some((_, slot)) = self.get_index_mut(index) {
                    slot.clear();
                    slot.push_str(value);
                }
            }
            None => {
                self.insert(name.to_string(), value.to_string());
            }
        }
    }
}

impl<S: HeaderSink + ?Sized> HeaderSink for &mut S {
    fn set_header(&mut self, name: &'static str, value: &str) {
        (**self).set_header(name, value);
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
