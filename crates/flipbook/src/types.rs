use serde::Serialize;

// ─── Catalogues ──────────────────────────────────────────────────────

/// A PDF catalogue the flip-book viewer can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    pub slug: &'static str,
    pub title: &'static str,
    /// Human-readable download size, e.g. "12MB".
    pub size_label: &'static str,
    /// CSS color used behind the thumbnail while it loads.
    pub accent: &'static str,
    pub description: &'static str,
    pub pdf_url: &'static str,
}

// ─── Product taxonomy ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Scissors,
    Activity,
    HeartPulse,
    Brain,
    Bone,
    Stethoscope,
    Syringe,
    Microscope,
    ShieldCheck,
    PenTool,
    CreditCard,
    Truck,
}

impl Icon {
    /// Single-glyph stand-in used where no icon font is loaded.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Scissors => "✂",
            Icon::Activity => "〰",
            Icon::HeartPulse => "♥",
            Icon::Brain => "✺",
            Icon::Bone => "⚕",
            Icon::Stethoscope => "⚕",
            Icon::Syringe => "✚",
            Icon::Microscope => "🔬",
            Icon::ShieldCheck => "🛡",
            Icon::PenTool => "✎",
            Icon::CreditCard => "💳",
            Icon::Truck => "🚚",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: Icon,
    pub subcategories: &'static [Subcategory],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subcategory {
    pub slug: &'static str,
    pub category: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Falls back to the parent category image when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specifications {
    pub material: &'static str,
    pub finish: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl Specifications {
    /// Label/value rows for the specification table, skipping absent fields.
    pub fn rows(&self) -> Vec<(&'static str, &'static str)> {
        let mut rows = vec![("Material", self.material), ("Finish", self.finish)];
        if let Some(length) = self.length {
            rows.push(("Length", length));
        }
        if let Some(kind) = self.kind {
            rows.push(("Type", kind));
        }
        rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub sku: &'static str,
    pub name: &'static str,
    /// Category slug.
    pub category: &'static str,
    /// Subcategory slug within `category`.
    pub subcategory: &'static str,
    pub description: &'static str,
    pub specifications: Specifications,
    pub image_url: &'static str,
}

// ─── Landing / contact content ───────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialty {
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueProp {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}
