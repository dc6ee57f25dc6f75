//! Command dispatch:
//! - resolves effective settings (defaults + environment overrides)
//! - composes store, parser, renderer and converter into the operations
//! - emits the script-filter JSON on stdout (diagnostics go to stderr)

use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use uuid::Uuid;

use crate::{
    alfred::{IconRef, Item, ItemText, Mod, Mods, Output},
    cli::{Cli, Command},
    convert::svg_to_png,
    init::init_scaffold,
    preview,
    query::parse_query,
    render::Renderer,
    store::StyleStore,
    style::Style,
    utils::{contents, env_opt_path, env_opt_string, preview_url, title_case, write_file},
};

/// Effective file locations and tool name for one invocation.
/// Defaults match the workflow layout: style sheet and symbol table in
/// the working directory, generated artifacts under the system temp dir.
pub(crate) struct Settings {
    pub(crate) styles_path: PathBuf,
    pub(crate) symbols_path: PathBuf,
    pub(crate) out_dir: PathBuf,
    pub(crate) converter: String,
}

impl Settings {
    pub(crate) fn from_env() -> Self {
        Settings {
            styles_path: env_opt_path("MKICON_STYLES")
                .unwrap_or_else(|| PathBuf::from("styles.json")),
            symbols_path: env_opt_path("MKICON_SYMBOLS")
                .unwrap_or_else(|| PathBuf::from("symbols.json")),
            out_dir: env_opt_path("MKICON_OUT_DIR").unwrap_or_else(std::env::temp_dir),
            converter: env_opt_string("MKICON_CONVERTER").unwrap_or_else(|| "inkscape".to_string()),
        }
    }
}

/// Run the parsed subcommand.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env();
    match cli.command {
        Command::ListAll => {
            let mut renderer = Renderer::new()?;
            list_all(&mut renderer, &settings)?.emit()
        }
        Command::EditStyle {
            symbol_file,
            name,
            query,
        } => {
            let mut renderer = Renderer::new()?;
            let symbol = contents(&symbol_file)?;
            edit_style(
                &mut renderer,
                &settings,
                &symbol,
                &name,
                query.as_deref().unwrap_or(""),
            )?
            .emit_pretty()
        }
        Command::SaveStyle { name, style_json } => save_style(&settings, &name, &style_json),
        Command::GenIconsForSymbol { symbol_file } => {
            let mut renderer = Renderer::new()?;
            let symbol = contents(&symbol_file)?;
            gen_icons_for_symbol(&mut renderer, &settings, &symbol)?.emit()
        }
        Command::Init { force, dir } => {
            init_scaffold(&dir.unwrap_or_else(|| PathBuf::from(".")), force)
        }
    }
}

/// Render the style at full size, write `<out>/<name>.svg`, and start
/// the PNG conversion. Returns the PNG path, which may not exist yet.
fn render_icon(
    renderer: &mut Renderer,
    settings: &Settings,
    style: &Style,
    symbol: &str,
) -> Result<PathBuf> {
    let svg = renderer.svg(style, symbol, 1.0)?;
    let svg_path = settings.out_dir.join(format!("{}.svg", style.name));
    write_file(&svg_path, &svg)?;
    svg_to_png(&svg_path, &settings.converter)
}

/// One item per known symbol; quicklook opens the style showcase with
/// that symbol substituted in.
fn list_all(renderer: &mut Renderer, settings: &Settings) -> Result<Output> {
    let store = StyleStore::load(&settings.styles_path)?;
    let showcase = preview::write_showcase_page(renderer, store.styles(), &settings.out_dir)?;

    let raw = contents(&settings.symbols_path)?;
    // the map keeps authored order (serde_json preserve_order)
    let symbols: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse symbol table: {}", settings.symbols_path.display()))?;

    let items = symbols
        .iter()
        .map(|(name, glyph)| {
            let symbol = glyph.as_str().unwrap_or_default().to_string();
            Item {
                title: symbol.clone(),
                subtitle: Some(name.clone()),
                arg: symbol.clone(),
                match_text: Some(name.clone()),
                icon: Some(IconRef {
                    path: "empty.png".to_string(),
                }),
                quicklookurl: Some(preview_url(&showcase, &symbol)),
                ..Default::default()
            }
        })
        .collect();
    Ok(Output { items })
}

/// Look up a style, apply query overrides, render it with the symbol and
/// offer save/overwrite actions carrying the merged record.
fn edit_style(
    renderer: &mut Renderer,
    settings: &Settings,
    symbol: &str,
    name: &str,
    query: &str,
) -> Result<Output> {
    let store = StyleStore::load(&settings.styles_path)?;
    let mut style = store
        .find(name)
        .cloned()
        .ok_or_else(|| anyhow!("unknown style: {name}"))?;
    parse_query(query).apply(&mut style);

    let png_path = render_icon(renderer, settings, &style, symbol)?;
    let page = preview::write_style_page(renderer, &style, &settings.out_dir)?;
    let merged = serde_json::to_string(&style).context("failed to serialize edited style")?;
    let display = title_case(name);
    let variables = BTreeMap::from([("style".to_string(), merged)]);

    let item = Item {
        title: format!("Editing {display}"),
        subtitle: Some("↩: icon file, ⌘↩: save as new style, ⌥↩: overwrite style".to_string()),
        arg: png_path.display().to_string(),
        item_type: Some("file:skipcheck".to_string()),
        icon: Some(IconRef {
            path: png_path.display().to_string(),
        }),
        quicklookurl: Some(preview_url(&page, symbol)),
        text: Some(ItemText {
            copy: Some(Uuid::new_v4().to_string()),
        }),
        mods: Some(Mods {
            cmd: Some(Mod {
                arg: name.to_string(),
                subtitle: "Save as new style".to_string(),
                variables: Some(variables.clone()),
            }),
            alt: Some(Mod {
                arg: name.to_string(),
                subtitle: format!("Overwrite {display}"),
                variables: Some(variables),
            }),
        }),
        ..Default::default()
    };
    Ok(Output { items: vec![item] })
}

/// Parse an inline style body, force its name, and upsert it into the
/// style sheet.
fn save_style(settings: &Settings, name: &str, style_json: &str) -> Result<()> {
    let mut style: Style = serde_json::from_str(style_json)
        .with_context(|| format!("failed to parse style body for '{name}'"))?;
    style.name = name.to_string();
    let mut store = StyleStore::load(&settings.styles_path)?;
    store.upsert(style);
    store.save()
}

/// One icon per stored style for the given symbol.
fn gen_icons_for_symbol(
    renderer: &mut Renderer,
    settings: &Settings,
    symbol: &str,
) -> Result<Output> {
    let store = StyleStore::load(&settings.styles_path)?;
    let subtitle = "drag-and-drop the icon or press ↩ for icon file (⌘↩ to edit style)";
    let mut items = Vec::with_capacity(store.styles().len());
    for style in store.styles() {
        let png_path = render_icon(renderer, settings, style, symbol)?;
        let page = preview::write_style_page(renderer, style, &settings.out_dir)?;
        items.push(Item {
            title: title_case(&style.name),
            subtitle: Some(subtitle.to_string()),
            arg: png_path.display().to_string(),
            item_type: Some("file:skipcheck".to_string()),
            icon: Some(IconRef {
                path: png_path.display().to_string(),
            }),
            quicklookurl: Some(preview_url(&page, symbol)),
            text: Some(ItemText {
                copy: Some(Uuid::new_v4().to_string()),
            }),
            mods: Some(Mods {
                cmd: Some(Mod {
                    arg: style.name.clone(),
                    subtitle: "edit style".to_string(),
                    variables: None,
                }),
                alt: None,
            }),
            ..Default::default()
        });
    }
    Ok(Output { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    // every test gets its own store + output dir so runs never collide
    fn workspace(styles_json: &str) -> (Settings, PathBuf) {
        let dir = std::env::temp_dir().join(format!("mkicon-cmd-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let styles_path = dir.join("styles.json");
        fs::write(&styles_path, styles_json).unwrap();
        let settings = Settings {
            styles_path,
            symbols_path: dir.join("symbols.json"),
            out_dir: dir.clone(),
            converter: "true".to_string(),
        };
        (settings, dir)
    }

    #[test]
    fn gen_icons_yields_one_item_per_style() {
        let (settings, dir) =
            workspace(r##"[{"name": "classic", "color": "#fff", "background": ["#000"]}]"##);
        let mut renderer = Renderer::new().unwrap();

        let output = gen_icons_for_symbol(&mut renderer, &settings, "A").unwrap();
        assert_eq!(output.items.len(), 1);
        let item = &output.items[0];
        assert_eq!(item.title, "Classic");
        assert!(item.arg.ends_with(".png"));
        assert!(Path::new(&item.arg).starts_with(&dir));
        assert_eq!(item.item_type.as_deref(), Some("file:skipcheck"));
        assert!(item.text.as_ref().unwrap().copy.is_some());
        // the svg itself was written and carries the symbol
        let svg = fs::read_to_string(dir.join("classic.svg")).unwrap();
        assert!(svg.contains(">A</text>"));
        // quicklook points at the per-style page with the symbol attached
        let url = item.quicklookurl.as_deref().unwrap();
        assert!(url.contains("classic.html"));
        assert!(url.contains("symbol=A"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn gen_icons_tokens_differ_between_items() {
        let (settings, dir) = workspace(r#"[{"name": "a"}, {"name": "b"}]"#);
        let mut renderer = Renderer::new().unwrap();
        let output = gen_icons_for_symbol(&mut renderer, &settings, "X").unwrap();
        let copies: Vec<&str> = output
            .items
            .iter()
            .map(|i| i.text.as_ref().unwrap().copy.as_deref().unwrap())
            .collect();
        assert_ne!(copies[0], copies[1]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn edit_style_applies_query_overrides() {
        let (settings, dir) =
            workspace(r##"[{"name": "classic", "color": "#fff", "background": ["#000"]}]"##);
        let mut renderer = Renderer::new().unwrap();

        let output =
            edit_style(&mut renderer, &settings, "A", "classic", "b=#111,#222 s=70").unwrap();
        assert_eq!(output.items.len(), 1);
        let item = &output.items[0];
        assert_eq!(item.title, "Editing Classic");

        // the merged style travels in the mod variables
        let mods = item.mods.as_ref().unwrap();
        let style_json = &mods.cmd.as_ref().unwrap().variables.as_ref().unwrap()["style"];
        let merged: Style = serde_json::from_str(style_json).unwrap();
        assert_eq!(merged.size, 70.0);
        assert_eq!(merged.background, vec!["#111".to_string(), "#222".to_string()]);
        assert_eq!(mods.alt.as_ref().unwrap().subtitle, "Overwrite Classic");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn edit_style_rejects_unknown_names() {
        let (settings, dir) = workspace(r#"[{"name": "classic"}]"#);
        let mut renderer = Renderer::new().unwrap();
        let err = edit_style(&mut renderer, &settings, "A", "missing", "").unwrap_err();
        assert_eq!(err.to_string(), "unknown style: missing");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_style_overwrites_in_place_and_appends_new() {
        let (settings, dir) = workspace(r#"[{"name": "a"}, {"name": "b"}]"#);

        save_style(&settings, "a", r##"{"color": "#123"}"##).unwrap();
        save_style(&settings, "c", r##"{"color": "#456"}"##).unwrap();

        let store = StyleStore::load(&settings.styles_path).unwrap();
        let names: Vec<&str> = store.styles().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(store.find("a").unwrap().color, "#123");
        assert_eq!(store.find("c").unwrap().color, "#456");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn list_all_emits_one_item_per_symbol_in_order() {
        let (settings, dir) = workspace(r#"[{"name": "classic"}]"#);
        fs::write(
            &settings.symbols_path,
            r#"{"zulu": "Z", "alpha": "A"}"#,
        )
        .unwrap();
        let mut renderer = Renderer::new().unwrap();

        let output = list_all(&mut renderer, &settings).unwrap();
        assert_eq!(output.items.len(), 2);
        // authored order, not alphabetical
        assert_eq!(output.items[0].subtitle.as_deref(), Some("zulu"));
        assert_eq!(output.items[0].title, "Z");
        assert_eq!(output.items[0].arg, "Z");
        assert_eq!(output.items[1].subtitle.as_deref(), Some("alpha"));
        assert!(output.items[0]
            .quicklookurl
            .as_deref()
            .unwrap()
            .contains("showcase.html"));
        // the showcase page was written alongside
        assert!(dir.join("showcase.html").exists());
        fs::remove_dir_all(&dir).ok();
    }
}
