use yew::prelude::*;

use crate::components::button::{Button, ButtonSize};
use crate::components::code_block::CodeBlock;
use crate::components::layout::{Section, SectionBackground, SectionHeader, SectionSize};
use crate::meta::use_page_meta;
use crate::Route;

/// Illustrative spatialpack.json shown in the code viewer. Static marketing
/// copy; never parsed at runtime.
const SAMPLE_MANIFEST: &str = r#"{
  "pack_id": "spatial.properties:wa:utilities-risk:v1",
  "version": "1.2.0",
  "created_at": "2025-12-01T02:14:00Z",
  "bbox": [-121.8, -23.6, -114.7, -16.3],
  "crs": "EPSG:4326",
  "tenant": "demo",

  "license": {
    "id": "SP-LicenseRef-Mixed-Demo-2025",
    "attribution": "See provenance.sources. Some layers are restricted to tenant roles."
  },

  "security": {
    "classification": "public",
    "visibility": ["demo:*"]
  },

  "layers": [
    {
      "id": "base.map",
      "type": "vector",
      "schema": "sp.base.map.v1",
      "pmtiles": "https://cdn.spatial.properties/packs/.../base.map.pmtiles",
      "stats": { "features": 18652340 }
    },
    {
      "id": "utilities.power_network",
      "type": "vector",
      "schema": "sp.wa.utilities.power_network.v1",
      "security": {
        "classification": "restricted",
        "visibility": ["demo:analyst", "demo:field_ops"]
      }
    },
    {
      "id": "risk.bushfire_risk_index",
      "type": "raster",
      "cog": "https://cdn.spatial.properties/packs/.../risk.bushfire_risk_index.cog.tif"
    }
  ],

  "deltas": [
    {
      "from": "1.1.0",
      "to": "1.2.0",
      "size_bytes": 38192712
    }
  ],

  "integrity": {
    "manifest_sha256": "sha256:111...demo"
  }
}"#;

struct WalkthroughStep {
    time: &'static str,
    title: &'static str,
    description: &'static str,
}

const WALKTHROUGH_STEPS: [WalkthroughStep; 6] = [
    WalkthroughStep {
        time: "0:00",
        title: "Find the pack",
        description: "Search for packs by name, region, layer, or publisher.",
    },
    WalkthroughStep {
        time: "0:45",
        title: "Check provenance + licensing",
        description: "See source lineage, license gates, and derived-from chains.",
    },
    WalkthroughStep {
        time: "1:30",
        title: "Toggle layers",
        description: "Preview vector, raster, and restricted layers with role-based access.",
    },
    WalkthroughStep {
        time: "2:15",
        title: "Run an operation",
        description: "Execute deterministic tools that produce publishable outputs.",
    },
    WalkthroughStep {
        time: "3:00",
        title: "Create a CSP-1 context packet",
        description: "Generate scoped packets for agents and offline field work.",
    },
    WalkthroughStep {
        time: "3:45",
        title: "Download offline bundle",
        description: "Get integrity-verified bundles ready for field deployment.",
    },
];

const DEMONSTRATES: [&str; 6] = [
    "Pack-first source of record (GeoParquet + delivery formats)",
    "Immutable, versioned delivery (URLs include pack + version)",
    "WA wedge alignment (utilities + bushfire risk)",
    "Deltas for efficient updates (fall back to full refresh when needed)",
    "Layer-level security classification",
    "Integrity hashes for verification",
];

#[function_component(Demo)]
pub fn demo() -> Html {
    use_page_meta(
        "Demo — Pack Explorer | Spatial.Properties",
        "Browse versioned Spatial Packs and inspect what you're actually shipping. \
         A guided walkthrough of the Pack Explorer.",
    );

    html! {
        <>
            <Section background={SectionBackground::Grid} size={SectionSize::Large}>
                <div class="page-hero page-hero--left">
                    <span class="eyebrow">{"Pack Explorer"}</span>
                    <h1 class="page-title">
                        {"Browse versioned Spatial Packs and inspect what you're \
                          actually shipping."}
                    </h1>
                    <p class="page-lede">
                        {"This is a guided walkthrough of demo content. Sources, \
                          licensing, and coverage vary by customer, jurisdiction, and \
                          contract. Your packs enforce license/provenance gates at \
                          publish time."}
                    </p>
                </div>
            </Section>

            <Section>
                <SectionHeader
                    eyebrow="Walkthrough"
                    title="See Pack Explorer in action"
                    description="A 4-minute tour of how teams discover, inspect, and use Spatial Packs."
                />

                <div class="video-placeholder">
                    <p class="video-placeholder-title">{"Video coming soon"}</p>
                    <p class="video-placeholder-note">{"Demo walkthrough will be embedded here"}</p>
                </div>

                <div class="walkthrough-grid">
                    {
                        WALKTHROUGH_STEPS.iter().map(|step| html! {
                            <div key={step.title} class="walkthrough-item">
                                <span class="walkthrough-time">{ step.time }</span>
                                <div>
                                    <h3 class="walkthrough-title">{ step.title }</h3>
                                    <p class="walkthrough-description">{ step.description }</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>

            <Section background={SectionBackground::Muted}>
                <SectionHeader
                    eyebrow="Sample manifest"
                    title="WA Utilities + Bushfire Risk (Pilbara)"
                    description="A real-world example showing versioned layers, mixed security classifications, and delta support."
                />

                <CodeBlock
                    code={SAMPLE_MANIFEST}
                    language="json"
                    label="spatialpack.json"
                    collapsible=true
                />

                <div class="demo-checklist-card">
                    <h3 class="card-title">{"What this demonstrates"}</h3>
                    <ul class="demo-checklist">
                        {
                            DEMONSTRATES.iter().map(|item| html! {
                                <li key={*item}>
                                    <span class="check">{"✓"}</span>
                                    { *item }
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </Section>

            <Section>
                <div class="page-hero">
                    <h2 class="section-title">{"Want to explore with your own data?"}</h2>
                    <p class="page-lede">
                        {"We'll help you publish a pilot pack and walk through the Pack \
                          Explorer with layers that matter to your team."}
                    </p>
                    <div class="hero-actions">
                        <Button to={Route::Contact} size={ButtonSize::Lg}>
                            {"Book a walkthrough"}
                        </Button>
                    </div>
                </div>
            </Section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::code_block::collapsed_summary;

    #[test]
    fn sample_manifest_is_well_formed_json() {
        let value: serde_json::Value =
            serde_json::from_str(SAMPLE_MANIFEST).expect("sample manifest parses");
        assert_eq!(
            value["pack_id"],
            "spatial.properties:wa:utilities-risk:v1"
        );
        assert_eq!(value["layers"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn sample_manifest_has_no_surrounding_whitespace() {
        // The copy action must hand the clipboard exactly this literal.
        assert_eq!(SAMPLE_MANIFEST, SAMPLE_MANIFEST.trim());
    }

    #[test]
    fn collapsed_summary_reflects_manifest_length() {
        let lines = SAMPLE_MANIFEST.split('\n').count();
        assert_eq!(
            collapsed_summary(SAMPLE_MANIFEST),
            format!("Click to expand ({lines} lines)")
        );
    }
}
