//! Hard-coded site content and the lookups the pages run over it.

use crate::types::*;

pub const SALES_EMAIL: &str = "sales@smithinstruments.com";
pub const SALES_PHONE: &str = "+92 330 2449855";
/// WhatsApp number in international format without `+` or spaces.
pub const WHATSAPP_NUMBER: &str = "923302449855";
pub const ADDRESS_LINES: [&str; 2] = ["123 Medical Park Blvd", "New York, NY 10012, USA"];

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Catalogues", path: "/catalogues" },
    NavItem { label: "About Us", path: "/about" },
    NavItem { label: "Blog", path: "/blog" },
    NavItem { label: "Contact", path: "/contact" },
];

// ─── Catalogues ──────────────────────────────────────────────────────

pub static CATALOGUES: &[Catalogue] = &[
    Catalogue {
        slug: "general-surgery",
        title: "General Surgery",
        size_label: "12MB",
        accent: "#262626",
        description: "Comprehensive guide for general procedures.",
        pdf_url: "/catalogues/general-surgery.pdf",
    },
    Catalogue {
        slug: "plastic-surgery",
        title: "Plastic & Aesthetic",
        size_label: "8MB",
        accent: "#C5B495",
        description: "Instruments for reconstruction and cosmetics.",
        pdf_url: "/catalogues/plastic-surgery.pdf",
    },
    Catalogue {
        slug: "cardiovascular",
        title: "Cardiovascular",
        size_label: "15MB",
        accent: "#262626",
        description: "High precision tools for heart surgery.",
        pdf_url: "/catalogues/cardiovascular.pdf",
    },
    Catalogue {
        slug: "neuro-spine",
        title: "Neuro & Spine",
        size_label: "10MB",
        accent: "#C5B495",
        description: "Microsurgical solutions for nervous systems.",
        pdf_url: "/catalogues/neuro-spine.pdf",
    },
    Catalogue {
        slug: "ent-diagnostics",
        title: "ENT & Diagnostics",
        size_label: "9MB",
        accent: "#262626",
        description: "Tools for ear, nose, and throat specialists.",
        pdf_url: "/catalogues/ent-diagnostics.pdf",
    },
    Catalogue {
        slug: "dental",
        title: "Dental Instruments",
        size_label: "11MB",
        accent: "#C5B495",
        description: "Complete range for dental professionals.",
        pdf_url: "/catalogues/dental.pdf",
    },
];

// ─── Categories ──────────────────────────────────────────────────────

const fn sub(category: &'static str, slug: &'static str, name: &'static str) -> Subcategory {
    Subcategory {
        slug,
        category,
        name,
        description: None,
        image: None,
    }
}

static GENERAL_SURGERY_SUBS: &[Subcategory] = &[
    sub("general-surgery", "scissors", "Scissors"),
    sub("general-surgery", "forceps", "Forceps"),
    sub("general-surgery", "retractors", "Retractors"),
    sub("general-surgery", "needle-holders", "Needle Holders"),
    sub("general-surgery", "scalpel-handles", "Scalpel Handles"),
    sub("general-surgery", "hemostats", "Hemostats"),
];

static DENTAL_SUBS: &[Subcategory] = &[
    sub("dental", "diagnostic", "Diagnostic"),
    sub("dental", "extraction", "Extraction"),
    sub("dental", "periodontal", "Periodontal"),
    sub("dental", "restorative", "Restorative"),
];

static CARDIOVASCULAR_SUBS: &[Subcategory] = &[
    sub("cardiovascular", "vascular-clamps", "Vascular Clamps"),
    sub("cardiovascular", "rib-spreaders", "Rib Spreaders"),
    sub("cardiovascular", "thoracic-scissors", "Thoracic Scissors"),
    sub("cardiovascular", "needle-holders", "Needle Holders"),
];

static NEURO_SPINE_SUBS: &[Subcategory] = &[
    sub("neuro-spine", "rongeurs", "Rongeurs"),
    sub("neuro-spine", "kerrison-punches", "Kerrison Punches"),
    sub("neuro-spine", "micro-scissors", "Micro Scissors"),
    sub("neuro-spine", "dissectors", "Dissectors"),
];

static ORTHOPEDIC_SUBS: &[Subcategory] = &[
    sub("orthopedic", "bone-cutters", "Bone Cutters"),
    sub("orthopedic", "mallets", "Mallets"),
    sub("orthopedic", "osteotomes", "Osteotomes"),
    sub("orthopedic", "wire-cutters", "Wire Cutters"),
];

pub static CATEGORIES: &[Category] = &[
    Category {
        slug: "general-surgery",
        name: "General Surgery",
        description: "Standard instruments for general surgical procedures.",
        image: "https://images.unsplash.com/photo-1584017911766-d451b3d0e843?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Scissors,
        subcategories: GENERAL_SURGERY_SUBS,
    },
    Category {
        slug: "dental",
        name: "Dental Instruments",
        description: "Precision tools for dental and orthodontic procedures.",
        image: "https://images.unsplash.com/photo-1606811841689-23dfddce3e95?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Activity,
        subcategories: DENTAL_SUBS,
    },
    Category {
        slug: "cardiovascular",
        name: "Cardiovascular",
        description: "Specialized instruments for heart and vascular surgery.",
        image: "https://images.unsplash.com/photo-1551601651-2a8555f1a136?auto=format&fit=crop&q=80&w=800",
        icon: Icon::HeartPulse,
        subcategories: CARDIOVASCULAR_SUBS,
    },
    Category {
        slug: "neuro-spine",
        name: "Neuro & Spine",
        description: "Microsurgical instruments for neurosurgery and spine.",
        image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Brain,
        subcategories: NEURO_SPINE_SUBS,
    },
    Category {
        slug: "orthopedic",
        name: "Orthopedic",
        description: "Heavy-duty instruments for bone and joint surgery.",
        image: "https://images.unsplash.com/photo-1530497610245-94d3c16cda28?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Bone,
        subcategories: ORTHOPEDIC_SUBS,
    },
    Category {
        slug: "ent",
        name: "ENT & Diagnostics",
        description: "Instruments for Ear, Nose, and Throat specialists.",
        image: "https://images.unsplash.com/photo-1516549655169-df83a0929519?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Stethoscope,
        subcategories: &[],
    },
    Category {
        slug: "plastic-surgery",
        name: "Plastic Surgery",
        description: "Fine instruments for reconstructive and aesthetic surgery.",
        image: "https://images.unsplash.com/photo-1527613426441-4da17471b66d?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Syringe,
        subcategories: &[],
    },
    Category {
        slug: "ophthalmic",
        name: "Ophthalmic",
        description: "Delicate tools for eye surgery and procedures.",
        image: "https://images.unsplash.com/photo-1579154204601-01588f351e67?auto=format&fit=crop&q=80&w=800",
        icon: Icon::Microscope,
        subcategories: &[],
    },
];

// ─── Products ────────────────────────────────────────────────────────

const GS_IMAGE: &str =
    "https://images.unsplash.com/photo-1584017911766-d451b3d0e843?auto=format&fit=crop&q=80&w=600";
const DN_IMAGE: &str =
    "https://images.unsplash.com/photo-1606811841689-23dfddce3e95?auto=format&fit=crop&q=80&w=600";
const CV_IMAGE: &str =
    "https://images.unsplash.com/photo-1551601651-2a8555f1a136?auto=format&fit=crop&q=80&w=600";
const OR_IMAGE: &str =
    "https://images.unsplash.com/photo-1530497610245-94d3c16cda28?auto=format&fit=crop&q=80&w=600";

const fn specs(
    material: &'static str,
    finish: &'static str,
    length: &'static str,
    kind: &'static str,
) -> Specifications {
    Specifications {
        material,
        finish,
        length: Some(length),
        kind: Some(kind),
    }
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "gs-001",
        sku: "SI-100-01",
        name: "Mayo Surgical Scissors Straight",
        category: "general-surgery",
        subcategory: "scissors",
        description: "Standard dissecting scissors with beveled blades, used for cutting fascia and sutures.",
        specifications: specs("German Stainless Steel", "Satin", "14cm", "Straight"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "gs-002",
        sku: "SI-100-02",
        name: "Mayo Surgical Scissors Curved",
        category: "general-surgery",
        subcategory: "scissors",
        description: "Curved blades allow for deeper tissue dissection with minimal trauma.",
        specifications: specs("German Stainless Steel", "Satin", "14cm", "Curved"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "gs-003",
        sku: "SI-100-05",
        name: "Metzenbaum Scissors",
        category: "general-surgery",
        subcategory: "scissors",
        description: "Fine surgical scissors designed for cutting delicate tissue and blunt dissection.",
        specifications: specs("German Stainless Steel", "Satin", "18cm", "Curved"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "gs-004",
        sku: "SI-101-10",
        name: "Adson Tissue Forceps",
        category: "general-surgery",
        subcategory: "forceps",
        description: "Thumb forceps used for holding and manipulating delicate tissues.",
        specifications: specs("German Stainless Steel", "Satin", "12cm", "1x2 Teeth"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "gs-005",
        sku: "SI-101-15",
        name: "DeBakey Atraumatic Forceps",
        category: "general-surgery",
        subcategory: "forceps",
        description: "Versatile thumb forceps used in numerous surgical procedures to grasp tissue.",
        specifications: specs("German Stainless Steel", "Satin", "20cm", "Atraumatic"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "gs-006",
        sku: "SI-102-01",
        name: "Halsted Mosquito Forceps",
        category: "general-surgery",
        subcategory: "hemostats",
        description: "Small hemostatic forceps used to control bleeding in small blood vessels.",
        specifications: specs("German Stainless Steel", "Mirror", "12.5cm", "Straight"),
        image_url: GS_IMAGE,
    },
    Product {
        id: "dn-001",
        sku: "SI-200-01",
        name: "Dental Mirror Handle with Mirror",
        category: "dental",
        subcategory: "diagnostic",
        description: "Ergonomic handle with high-definition mirror for oral examination.",
        specifications: specs("Stainless Steel", "Mirror", "Standard", "No. 4"),
        image_url: DN_IMAGE,
    },
    Product {
        id: "dn-002",
        sku: "SI-200-05",
        name: "Dental Explorer Probe",
        category: "dental",
        subcategory: "diagnostic",
        description: "Double-ended explorer for detecting cavities and calculus.",
        specifications: specs("Stainless Steel", "Satin", "Standard", "Double Ended"),
        image_url: DN_IMAGE,
    },
    Product {
        id: "dn-003",
        sku: "SI-201-10",
        name: "Extracting Forceps Upper Molars",
        category: "dental",
        subcategory: "extraction",
        description: "Designed for the extraction of upper molars (right).",
        specifications: specs("German Stainless Steel", "Satin", "Standard", "Fig. 17"),
        image_url: DN_IMAGE,
    },
    Product {
        id: "dn-004",
        sku: "SI-202-01",
        name: "Gracey Curette 1/2",
        category: "dental",
        subcategory: "periodontal",
        description: "Site-specific curette for scaling and root planing of anterior teeth.",
        specifications: specs("High Carbon Steel", "Satin", "Standard", "1/2"),
        image_url: DN_IMAGE,
    },
    Product {
        id: "cv-001",
        sku: "SI-300-01",
        name: "Castroviejo Needle Holder",
        category: "cardiovascular",
        subcategory: "needle-holders",
        description: "Microsurgical needle holder with locking mechanism for fine suturing.",
        specifications: specs("Titanium", "Blue Anodized", "14cm", "Straight"),
        image_url: CV_IMAGE,
    },
    Product {
        id: "cv-002",
        sku: "SI-300-10",
        name: "Potts-Smith Scissors",
        category: "cardiovascular",
        subcategory: "thoracic-scissors",
        description: "Angled scissors for vascular incision and extension.",
        specifications: specs("German Stainless Steel", "Satin", "19cm", "45 Degree"),
        image_url: CV_IMAGE,
    },
    Product {
        id: "cv-003",
        sku: "SI-301-05",
        name: "Satinsky Vena Cava Clamp",
        category: "cardiovascular",
        subcategory: "vascular-clamps",
        description: "Partial occlusion clamp for vascular surgery.",
        specifications: specs("German Stainless Steel", "Satin", "26cm", "Fig. 1"),
        image_url: CV_IMAGE,
    },
    Product {
        id: "or-001",
        sku: "SI-400-01",
        name: "Liston Bone Cutting Forceps",
        category: "orthopedic",
        subcategory: "bone-cutters",
        description: "Heavy duty forceps for cutting bone.",
        specifications: specs("German Stainless Steel", "Satin", "20cm", "Straight"),
        image_url: OR_IMAGE,
    },
    Product {
        id: "or-002",
        sku: "SI-400-10",
        name: "Lambotte Osteotome",
        category: "orthopedic",
        subcategory: "osteotomes",
        description: "Flat osteotome for bone cutting and shaping.",
        specifications: specs("German Stainless Steel", "Satin", "24cm", "10mm"),
        image_url: OR_IMAGE,
    },
    Product {
        id: "or-003",
        sku: "SI-401-05",
        name: "Wire Cutter TC",
        category: "orthopedic",
        subcategory: "wire-cutters",
        description: "Tungsten Carbide insert wire cutter for K-wires and pins.",
        specifications: specs("TC / Stainless", "Satin", "18cm", "Double Action"),
        image_url: OR_IMAGE,
    },
];

// ─── Landing page ────────────────────────────────────────────────────

pub static SPECIALTIES: &[Specialty] = &[
    Specialty { name: "Plastic Surgery", icon: Icon::Scissors, description: "Precision instruments for reconstruction" },
    Specialty { name: "Cardiovascular", icon: Icon::HeartPulse, description: "Advanced tools for cardiac procedures" },
    Specialty { name: "Neurology", icon: Icon::Brain, description: "Microsurgical instruments for neurosurgery" },
    Specialty { name: "Orthopedics", icon: Icon::Bone, description: "Heavy-duty solutions for bone surgery" },
    Specialty { name: "Diagnostics", icon: Icon::Stethoscope, description: "Essential diagnostic equipment" },
    Specialty { name: "Laryngoscopes", icon: Icon::Microscope, description: "High-visibility optical instruments" },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "The precision of Smith Instruments matches the highest standards we require in reconstructive surgery.",
        author: "Dr. Almeida",
        location: "São Paulo, Brazil",
        role: "Chief Surgeon",
    },
    Testimonial {
        text: "Excellent delivery times and the payment-after-satisfaction policy gives us total peace of mind.",
        author: "Maria Gonzalez",
        location: "Buenos Aires, Argentina",
        role: "Procurement Director",
    },
    Testimonial {
        text: "We have partnered with them for 5 years. Their customized OEM solutions are impeccable.",
        author: "Dr. Silva",
        location: "Santiago, Chile",
        role: "Clinic Director",
    },
];

pub static VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        title: "Medical-Grade Steel",
        description: "Using only the highest quality materials for durability and performance.",
        icon: Icon::ShieldCheck,
    },
    ValueProp {
        title: "Customizable",
        description: "Tailored solutions to meet the specific needs of your surgical team.",
        icon: Icon::PenTool,
    },
    ValueProp {
        title: "Payment After Delivery",
        description: "Your satisfaction is our priority. Inspect your order before payment.",
        icon: Icon::CreditCard,
    },
    ValueProp {
        title: "Fast Delivery",
        description: "Efficient logistics to ensure your instruments arrive on time, every time.",
        icon: Icon::Truck,
    },
];

// ─── Contact page ────────────────────────────────────────────────────

pub static FAQS: &[FaqItem] = &[
    FaqItem {
        question: "What materials are used in your instruments?",
        answer: "We strictly use high-grade German Stainless Steel (AISI 410, 420, 304) depending on the instrument type, ensuring corrosion resistance and longevity.",
    },
    FaqItem {
        question: "Do you offer international shipping?",
        answer: "Yes, we ship globally using DHL, FedEx, and UPS. All shipments are fully insured.",
    },
    FaqItem {
        question: "What is your return policy?",
        answer: "We offer a 'Payment After Satisfaction' policy. If the instruments do not meet your quality standards upon inspection, you may return them without charge.",
    },
    FaqItem {
        question: "Can you manufacture custom instruments?",
        answer: "Absolutely. Our OEM division can modify existing patterns or create entirely new instruments based on your technical drawings or samples.",
    },
    FaqItem {
        question: "Are your products certified?",
        answer: "Yes, Smith Instruments is ISO 9001, ISO 13485 certified, and our products are CE marked and FDA compliant.",
    },
];

// ─── Lookups ─────────────────────────────────────────────────────────

pub fn catalogue_by_slug(slug: &str) -> Option<&'static Catalogue> {
    CATALOGUES.iter().find(|c| c.slug == slug)
}

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Subcategories of a category; empty for unknown categories and for
/// categories whose listing has not been filled in yet.
pub fn subcategories(category: &str) -> &'static [Subcategory] {
    category_by_slug(category)
        .map(|c| c.subcategories)
        .unwrap_or(&[])
}

pub fn subcategory(category: &str, slug: &str) -> Option<&'static Subcategory> {
    subcategories(category).iter().find(|s| s.slug == slug)
}

/// Image for a subcategory card, falling back to its category's image.
pub fn subcategory_image(sub: &Subcategory) -> &'static str {
    sub.image
        .or_else(|| category_by_slug(sub.category).map(|c| c.image))
        .unwrap_or("")
}

pub fn products_in(category: &str, subcategory: &str) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| p.category == category && p.subcategory == subcategory)
        .collect()
}

pub fn products_in_category(category: &str) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.category == category).collect()
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_unique() {
        let cats: HashSet<_> = CATALOGUES.iter().map(|c| c.slug).collect();
        assert_eq!(cats.len(), CATALOGUES.len());
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn test_every_product_resolves_to_a_subcategory() {
        for p in PRODUCTS {
            assert!(
                subcategory(p.category, p.subcategory).is_some(),
                "{} points at missing {}/{}",
                p.id,
                p.category,
                p.subcategory
            );
        }
    }

    #[test]
    fn test_subcategories_carry_parent_slug() {
        for cat in CATEGORIES {
            for sub in cat.subcategories {
                assert_eq!(sub.category, cat.slug);
            }
        }
    }

    #[test]
    fn test_products_in_subcategory() {
        let scissors = products_in("general-surgery", "scissors");
        assert_eq!(scissors.len(), 3);
        assert!(scissors.iter().all(|p| p.subcategory == "scissors"));
        // Same subcategory slug under another category does not leak in
        assert_eq!(products_in("cardiovascular", "needle-holders").len(), 1);
        assert!(products_in("general-surgery", "retractors").is_empty());
    }

    #[test]
    fn test_unknown_category_has_no_subcategories() {
        assert!(subcategories("veterinary").is_empty());
        assert!(subcategories("ophthalmic").is_empty());
        assert!(subcategory("veterinary", "scissors").is_none());
    }

    #[test]
    fn test_subcategory_image_falls_back_to_category() {
        let sub = subcategory("dental", "extraction").unwrap();
        assert_eq!(subcategory_image(sub), category_by_slug("dental").unwrap().image);
    }

    #[test]
    fn test_product_lookup() {
        let p = product_by_id("cv-003").unwrap();
        assert_eq!(p.sku, "SI-301-05");
        assert!(product_by_id("xx-999").is_none());
    }

    #[test]
    fn test_catalogue_urls_are_pdfs() {
        for c in CATALOGUES {
            assert!(c.pdf_url.starts_with("/catalogues/"));
            assert!(c.pdf_url.ends_with(".pdf"));
        }
    }
}
