use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::code_block::CodeBlock;
use crate::components::layout::{Section, SectionBackground, SectionHeader, SectionSize};
use crate::meta::use_page_meta;
use crate::Route;

const QUICKSTART: &str = r#"# Pin a pack version and fetch its manifest
curl -s https://cdn.spatial.properties/packs/wa/utilities-risk/1.2.0/spatialpack.json

# Query a layer straight from GeoParquet, no ETL
duckdb -c "SELECT id, geometry
           FROM read_parquet('https://cdn.spatial.properties/packs/wa/utilities-risk/1.2.0/base.map.parquet')
           LIMIT 10"

# Point your map at the PMTiles archive
pmtiles show https://cdn.spatial.properties/packs/wa/utilities-risk/1.2.0/base.map.pmtiles"#;

#[function_component(Developers)]
pub fn developers() -> Html {
    use_page_meta(
        "Developers — Build with Spatial Packs | Spatial.Properties",
        "Use Spatial.Properties to fetch versioned Spatial Packs, deliver tiles via \
         CDN, query GeoParquet, and run deterministic geospatial tools.",
    );

    html! {
        <>
            <Section background={SectionBackground::Grid} size={SectionSize::Large}>
                <div class="page-hero">
                    <span class="eyebrow">{"Developers"}</span>
                    <h1 class="page-title">
                        {"Stop rebuilding the same layers. Ship spatial context as a \
                          versioned pack."}
                    </h1>
                    <p class="page-lede">
                        {"Everything is a URL. Pin a pack version, read open formats \
                          directly, and let the manifest answer the provenance questions."}
                    </p>
                    <div class="hero-actions">
                        <Button to={Route::Demo}>{"View demo"}</Button>
                        <Button to={Route::Contact} variant={ButtonVariant::Secondary}>
                            {"Book a walkthrough"}
                        </Button>
                    </div>
                </div>
            </Section>

            <Section id="quickstart">
                <SectionHeader
                    eyebrow="Quickstart"
                    title="From zero to a queryable layer in three commands."
                    description="Packs are plain HTTP. Anything that reads GeoParquet, PMTiles, or COG already speaks Spatial.Properties."
                />
                <CodeBlock code={QUICKSTART} language="shell" label="quickstart.sh" />
            </Section>

            <Section id="api" background={SectionBackground::Muted}>
                <SectionHeader
                    eyebrow="API"
                    title="Catalog search, manifests, and signed delivery."
                    description="Full API reference is coming soon. Until then, the demo page shows the manifest shape every endpoint returns."
                />
            </Section>

            <Section id="csp1">
                <SectionHeader
                    eyebrow="CSP-1"
                    title="Context packets for agents and offline field work."
                    description="CSP-1 scopes a pack down to a task: the layers an agent or field device needs, with the provenance trail attached. Detail ships with the developer docs."
                />
            </Section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quickstart_pins_an_immutable_pack_version() {
        // Immutable paths carry the pack version; the sample must model that.
        assert!(QUICKSTART.contains("/packs/wa/utilities-risk/1.2.0/"));
    }
}
