//! Artifact template - the generated module and declaration for one icon
//!
//! The module defines a custom element that hides itself from assistive
//! technology, renders the inline content into an open shadow root on every
//! construction, and registers itself under its tag name:
//!
//! - tag not registered: define it
//! - tag registered to this same class: leave it alone
//! - tag registered to another class: throw
//!
//! The declaration exposes the class and adds the tag to
//! `HTMLElementTagNameMap`. Both are rendered from the same [`DerivedNames`],
//! so identifier and tag are spelled identically in the pair.

use crate::domain::entities::RenderedArtifact;
use crate::domain::services::dedent::Template;
use crate::domain::value_objects::DerivedNames;
use crate::error::IconResult;

const MODULE: Template<'static> = Template::new(&[
    r#"
    export default class "#,
    r#" extends HTMLElement {
      constructor() {
        super();

        const internals = this.attachInternals();
        internals.ariaHidden ??= "true";

        this.attachShadow({ mode: "open" }).innerHTML =
          '"#,
    r#"';
      }
    }

    const registered = window.customElements.get(""#,
    r#"");

    if (registered === undefined) {
      window.customElements.define(""#,
    r#"", "#,
    r#");
    } else if (!Object.is(registered, "#,
    r#")) {
      throw new Error('""#,
    r#"" is already registered to a different element');
    }
    "#,
]);

const DECLARATION: Template<'static> = Template::new(&[
    r#"
    export default class "#,
    r#" extends HTMLElement {
      constructor();
    }

    declare global {
      interface HTMLElementTagNameMap {
        ""#,
    r#"": "#,
    r#";
      }
    }
    "#,
]);

/// Render the module and declaration for one asset
///
/// `escaped_inline_content` must already be escaped for a single-quoted
/// literal (see [`crate::domain::services::escaping`]).
pub fn render_artifact(
    names: &DerivedNames,
    escaped_inline_content: &str,
) -> IconResult<RenderedArtifact> {
    let identifier = names.identifier.as_str();
    let tag = names.tag_name.as_str();

    let module = MODULE.render(&[
        identifier,
        escaped_inline_content,
        tag,
        tag,
        identifier,
        identifier,
        tag,
    ])?;
    let declaration = DECLARATION.render(&[identifier, tag, identifier])?;

    Ok(RenderedArtifact::new(names.clone(), module, declaration))
}

/// Stylesheet for the custom element host at the given size
pub fn host_style(size: &str) -> String {
    crate::dedent!(
        "
        :host {{
          display: block;
          flex: none;
          line-height: 1;
          width: {size};
          height: {size};
        }}
        "
    )
}

/// Inline shadow-root content: the style element followed by the markup
pub fn inline_content(style: &str, markup: &str) -> String {
    format!("<style>{}</style>{}", style, markup)
}
