// Template renderer: the fixed component and styles skeletons for each
// generator variant, plus the small placeholder substitution they share.
//
// Placeholders are `{{name}}` and `{{class}}`. Values are inserted
// verbatim; a name that is not a valid identifier produces output that
// will not compile, and that is left to the developer running the tool.

use crate::token::ClassToken;

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct Substitutions<'a> {
    pub name: &'a str,
    pub class_token: Option<&'a ClassToken>,
}

impl<'a> Substitutions<'a> {
    pub fn new(name: &'a str) -> Self {
        Substitutions {
            name,
            class_token: None,
        }
    }

    pub fn with_class_token(mut self, token: &'a ClassToken) -> Self {
        self.class_token = Some(token);
        self
    }

    fn lookup(&self, key: &str) -> Option<&'a str> {
        match key {
            "name" => Some(self.name),
            "class" => self.class_token.map(ClassToken::as_str),
            _ => None,
        }
    }
}

/// Replace every known `{{key}}` in `template`. Unknown keys, and keys
/// with no value, are left as written. Substituted values are never
/// rescanned.
pub fn render(template: &str, subs: &Substitutions<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let placeholder = &rest[open..open + 2 + close + 2];
        match subs.lookup(&after[..close]) {
            Some(value) => out.push_str(value),
            None => out.push_str(placeholder),
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

/// The two rendered files of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub component: String,
    pub styles: String,
}

/// Which generator's templates to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Ionic React component with an inline props interface.
    Ionic,
    /// React component with an external props type and a random class
    /// token coupling the markup to its styles.
    Classed,
}

impl Variant {
    pub fn bin_name(self) -> &'static str {
        match self {
            Variant::Ionic => "bp",
            Variant::Classed => "bp-classed",
        }
    }

    pub fn uses_class_token(self) -> bool {
        matches!(self, Variant::Classed)
    }

    fn templates(self) -> (&'static str, &'static str) {
        match self {
            Variant::Ionic => (IONIC_COMPONENT, IONIC_STYLES),
            Variant::Classed => (CLASSED_COMPONENT, CLASSED_STYLES),
        }
    }

    pub fn render(self, subs: &Substitutions<'_>) -> Rendered {
        let (component, styles) = self.templates();
        Rendered {
            component: render(component, subs),
            styles: render(styles, subs),
        }
    }
}

const IONIC_COMPONENT: &str = r#"
import React from 'react';
import StyledDiv from './{{name}}.styles';

interface {{name}}Props {}
export default function {{name}}(props: {{name}}Props): React.ReactElement | null {
    return (
        <StyledDiv>

        </StyledDiv>
    );
}   
"#;

const IONIC_STYLES: &str = r#"
import styled from "components/styled";
export default styled('div')`

    /* 
    Your css goes here. 
    Change the "div" string to any html tag or any Ionic React component. This 
    will be the main styled body of your component. 

    NOTE: All styles that apply to {{name}}.tsx and its children should all 
    be placed here.
    */

`
"#;

const CLASSED_COMPONENT: &str = r#"
import React from 'react';
import type { {{name}}Props } from './{{name}}.types';
import StyledDiv from './{{name}}.styles';

export default function {{name}}(props: {{name}}Props): JSX.Element {
    return (
        <StyledDiv>
            <div className="{{class}}">

            </div>
        </StyledDiv>
    );
}
"#;

const CLASSED_STYLES: &str = r#"
import styled from 'styled-components';
export default styled.div`

    /*
    Your css goes here.
    Rules for {{name}}.tsx belong under the generated class below.
    */
    .{{class}} {

    }

`;
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn render_replaces_every_placeholder() {
        let out = render("{{name}} and {{name}}Props", &Substitutions::new("Card"));
        assert_eq!(out, "Card and CardProps");
    }

    #[test]
    fn render_keeps_unknown_and_unset_keys() {
        let out = render("{{other}} .{{class}}", &Substitutions::new("Card"));
        assert_eq!(out, "{{other}} .{{class}}");
    }

    #[test]
    fn render_keeps_unclosed_braces() {
        let out = render("{{name}} {{name", &Substitutions::new("Card"));
        assert_eq!(out, "Card {{name");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let token = ClassToken::generate_with(&mut StdRng::seed_from_u64(1));
        let subs = Substitutions::new("{{class}}").with_class_token(&token);
        assert_eq!(render("{{name}}", &subs), "{{class}}");
    }

    #[test]
    fn ionic_card_component() {
        let out = Variant::Ionic.render(&Substitutions::new("Card"));
        assert!(out.component.contains("import StyledDiv from './Card.styles';"));
        assert!(out.component.contains("interface CardProps {}"));
        assert!(out.component.contains("export default function Card(props: CardProps)"));
        assert!(out.styles.contains(r#"import styled from "components/styled";"#));
        assert!(out.styles.contains("styles that apply to Card.tsx"));
        assert!(!out.component.contains("{{"));
        assert!(!out.styles.contains("{{"));
    }

    #[test]
    fn classed_card_shares_token() {
        let token = ClassToken::generate_with(&mut StdRng::seed_from_u64(9));
        let subs = Substitutions::new("Card").with_class_token(&token);
        let out = Variant::Classed.render(&subs);

        assert!(out.component.contains("import type { CardProps } from './Card.types';"));
        assert!(out.component.contains("export default function Card(props: CardProps)"));
        assert!(out
            .component
            .contains(&format!(r#"<div className="{}">"#, token)));
        assert!(out.styles.contains(&format!(".{} {{", token)));
        assert!(out.styles.contains("Card.tsx"));
    }

    #[test]
    fn ionic_keeps_trailing_whitespace() {
        let out = Variant::Ionic.render(&Substitutions::new("Card"));
        assert!(out.component.ends_with("    );\n}   \n"));
        assert!(out.styles.contains("    /* \n    Your css goes here. \n"));
        assert!(out.styles.contains("Ionic React component. This \n"));
        assert!(out.styles.contains("body of your component. \n"));
        assert!(out.styles.contains("Card.tsx and its children should all \n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let subs = Substitutions::new("Card");
        assert_eq!(Variant::Ionic.render(&subs), Variant::Ionic.render(&subs));
    }
}
