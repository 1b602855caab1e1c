use crate::config::MethodKeyMode;
use crate::core::{ClassLoc, LocReport, MethodLoc};
use std::collections::HashMap;
use std::path::PathBuf;

/// Builds a [`LocReport`] from the classes found in each document.
///
/// Declarations of one class (same qualified name) within one project are
/// merged, which covers `partial` classes split across files. Classes from
/// different projects are never merged.
#[derive(Debug)]
pub struct LocAggregator {
    mode: MethodKeyMode,
    classes: Vec<ClassLoc>,
    index: HashMap<(PathBuf, String), usize>,
}

impl LocAggregator {
    pub fn new(mode: MethodKeyMode) -> Self {
        Self {
            mode,
            classes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn add_classes(&mut self, classes: impl IntoIterator<Item = ClassLoc>) {
        for class in classes {
            self.add_class(class);
        }
    }

    pub fn add_class(&mut self, class: ClassLoc) {
        let key = (class.project.clone(), class.qualified_name.clone());
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.classes.len();
                self.classes.push(ClassLoc::new(
                    class.name.clone(),
                    class.qualified_name.clone(),
                    class.project.clone(),
                    class.file.clone(),
                ));
                self.index.insert(key, slot);
                slot
            }
        };

        for method in class.methods {
            self.insert_method(slot, method);
        }
    }

    /// Insert or replace a method. A replaced method keeps its position.
    fn insert_method(&mut self, slot: usize, method: MethodLoc) {
        let mode = self.mode;
        let class = &mut self.classes[slot];
        let existing = class
            .methods
            .iter_mut()
            .find(|m| method_key(mode, m) == method_key(mode, &method));

        match existing {
            Some(existing) => {
                if mode == MethodKeyMode::Name && existing.signature != method.signature {
                    tracing::warn!(
                        class = %class.qualified_name,
                        kept = %method.signature,
                        dropped = %existing.signature,
                        "Overload replaced; methods are keyed by name"
                    );
                } else {
                    tracing::warn!(
                        class = %class.qualified_name,
                        method = %method.signature,
                        dropped_line = existing.line,
                        kept_line = method.line,
                        "Duplicate method signature; keeping the last declaration"
                    );
                }
                *existing = method;
            }
            None => class.methods.push(method),
        }
    }

    pub fn finish(self) -> LocReport {
        LocReport {
            classes: self.classes,
        }
    }
}

fn method_key(mode: MethodKeyMode, method: &MethodLoc) -> &str {
    match mode {
        MethodKeyMode::Signature => &method.signature,
        MethodKeyMode::Name => &method.name,
    }
}
