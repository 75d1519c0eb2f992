//! Vite config template.
//!
//! Every `{{placeholder}}` receives a pre-encoded JSON literal, so the
//! template is rendered with escaping disabled.

pub const VITE_CONFIG_TEMPLATE: &str = r#"// Generated by npm_site_bundler. Do not edit.
const externalizeBareImports = {{externalize_bare_imports}};
const localSpecifier = new RegExp({{local_specifier_pattern}});
const htmlPath = new RegExp({{html_path_pattern}}, "i");

function isExternal(id) {
  if (!externalizeBareImports) {
    return false;
  }
  return !localSpecifier.test(id) && !htmlPath.test(id);
}

export default {
  root: {{root}},
  logLevel: "info",
  build: {
    outDir: {{out_dir}},
    emptyOutDir: {{empty_out_dir}},
    sourcemap: {{source_map}},
    cssCodeSplit: {{css_code_split}},
    manifest: {{manifest}},
    modulePreload: {{module_preload}},
    rollupOptions: {
{{#if has_input}}
      input: {{input}},
{{/if}}
      external: isExternal,
      output: {
        entryFileNames: {{entry_file_names}},
        chunkFileNames: {{chunk_file_names}},
        assetFileNames: {{asset_file_names}},
      },
    },
  },
};
"#;
