use std::path::PathBuf;

/// LOC of one method with a block body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodLoc {
    pub name: String,
    pub signature: String,
    pub line: usize,
    pub loc: usize,
}

/// Per-class method LOC. The class total is always derived from `methods`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassLoc {
    pub name: String,
    pub qualified_name: String,
    /// Project file the class was loaded from
    pub project: PathBuf,
    /// Document holding the first declaration seen
    pub file: PathBuf,
    pub methods: Vec<MethodLoc>,
}

impl ClassLoc {
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        project: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            project: project.into(),
            file: file.into(),
            methods: Vec::new(),
        }
    }

    /// Sum of the LOC of every method currently in the class
    pub fn total(&self) -> usize {
        self.methods.iter().map(|m| m.loc).sum()
    }

    pub fn method(&self, name: &str) -> Option<&MethodLoc> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Name to print for `method`: its signature when the class holds
    /// several overloads of that name, the bare name otherwise.
    pub fn method_label<'a>(&self, method: &'a MethodLoc) -> &'a str {
        let overloads = self
            .methods
            .iter()
            .filter(|m| m.name == method.name)
            .count();
        if overloads > 1 {
            &method.signature
        } else {
            &method.name
        }
    }
}

/// Classes in first-seen order: project order, then document order,
/// then declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocReport {
    pub classes: Vec<ClassLoc>,
}

impl LocReport {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn class(&self, name: &str) -> Option<&ClassLoc> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Name to print for `class`: its qualified name when another class in
    /// the report shares its simple name, the simple name otherwise.
    pub fn class_label<'a>(&self, class: &'a ClassLoc) -> &'a str {
        let namesakes = self.classes.iter().filter(|c| c.name == class.name).count();
        if namesakes > 1 {
            &class.qualified_name
        } else {
            &class.name
        }
    }

    /// Class name to total LOC, in report order
    pub fn class_totals(&self) -> Vec<(&str, usize)> {
        self.classes
            .iter()
            .map(|c| (c.name.as_str(), c.total()))
            .collect()
    }

    pub fn total_methods(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, signature: &str, loc: usize) -> MethodLoc {
        MethodLoc {
            name: name.to_string(),
            signature: signature.to_string(),
            line: 1,
            loc,
        }
    }

    #[test]
    fn total_of_empty_class_is_zero() {
        let class = ClassLoc::new("Foo", "App.Foo", "App.csproj", "Foo.cs");
        assert_eq!(class.total(), 0);
    }

    #[test]
    fn total_tracks_current_methods() {
        let mut class = ClassLoc::new("Foo", "Foo", "App.csproj", "Foo.cs");
        class.methods.push(method("Bar", "Bar()", 3));
        class.methods.push(method("Baz", "Baz()", 0));
        assert_eq!(class.total(), 3);

        class.methods[1].loc = 4;
        assert_eq!(class.total(), 7);
    }

    #[test]
    fn overloads_are_labelled_by_signature() {
        let mut class = ClassLoc::new("Foo", "Foo", "App.csproj", "Foo.cs");
        class.methods.push(method("Run", "Run()", 1));
        class.methods.push(method("Run", "Run(int)", 2));
        class.methods.push(method("Stop", "Stop()", 1));

        let labels: Vec<_> = class.methods.iter().map(|m| class.method_label(m)).collect();
        assert_eq!(labels, vec!["Run()", "Run(int)", "Stop"]);
    }

    #[test]
    fn class_totals_follow_report_order() {
        let mut a = ClassLoc::new("A", "A", "App.csproj", "A.cs");
        a.methods.push(method("M", "M()", 2));
        let b = ClassLoc::new("B", "B", "App.csproj", "B.cs");
        let report = LocReport {
            classes: vec![a, b],
        };

        assert_eq!(report.class_totals(), vec![("A", 2), ("B", 0)]);
        assert_eq!(report.total_methods(), 1);
    }

    #[test]
    fn ambiguous_class_names_are_labelled_by_qualified_name() {
        let report = LocReport {
            classes: vec![
                ClassLoc::new("Foo", "A.Foo", "App.csproj", "A.cs"),
                ClassLoc::new("Foo", "B.Foo", "App.csproj", "B.cs"),
                ClassLoc::new("Bar", "B.Bar", "App.csproj", "B.cs"),
            ],
        };

        let labels: Vec<_> = report.classes.iter().map(|c| report.class_label(c)).collect();
        assert_eq!(labels, vec!["A.Foo", "B.Foo", "Bar"]);
    }
}
