use bundlescope_api::{LoaderRule, LoaderUse};
use serde_json::{Map, Value, json};

pub const TRANSPILE_RULE: &str = "transpile";
pub const STYLE_RULE: &str = "style";
pub const ASSET_RULE: &str = "asset";

/// Loader that hands extracted styles to the style-extraction capability.
pub const STYLE_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

fn options(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Scripts go through babel with preset-env polyfilling on demand.
pub fn transpile_rule() -> LoaderRule {
    LoaderRule {
        name: TRANSPILE_RULE.to_string(),
        test: r"\.js$".to_string(),
        exclude: Some("node_modules".to_string()),
        case_insensitive: false,
        uses: vec![LoaderUse::with_options(
            "babel-loader",
            options(json!({
                "presets": [
                    ["@babel/preset-env", { "useBuiltIns": "usage", "corejs": 3 }]
                ]
            })),
        )],
    }
}

/// sass -> postcss (autoprefixer) -> css -> extraction, last loader first.
pub fn style_rule(source_maps: bool) -> LoaderRule {
    LoaderRule {
        name: STYLE_RULE.to_string(),
        test: r"\.s?css$".to_string(),
        exclude: None,
        case_insensitive: false,
        uses: vec![
            LoaderUse::new(STYLE_EXTRACT_LOADER),
            LoaderUse::with_options(
                "css-loader",
                options(json!({
                    "url": false,
                    "sourceMap": source_maps,
                    "importLoaders": 2
                })),
            ),
            LoaderUse::with_options(
                "postcss-loader",
                options(json!({
                    "sourceMap": source_maps,
                    "postcssOptions": {
                        "plugins": [["autoprefixer", { "grid": true }]]
                    }
                })),
            ),
            LoaderUse::with_options("sass-loader", options(json!({ "sourceMap": source_maps }))),
        ],
    }
}

/// Images and fonts are copied to the output as-is.
pub fn asset_rule() -> LoaderRule {
    LoaderRule {
        name: ASSET_RULE.to_string(),
        test: r"\.(png|jpe?g|gif|eot|woff2|woff|ttf|svg)$".to_string(),
        exclude: None,
        case_insensitive: true,
        uses: vec![LoaderUse::new("file-loader")],
    }
}

pub fn default_rules(source_maps: bool) -> Vec<LoaderRule> {
    vec![transpile_rule(), style_rule(source_maps), asset_rule()]
}
