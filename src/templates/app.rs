//! App Router scaffolding: root layout, catch-all page, client wrapper and
//! the env helper module

use super::js_string;
use crate::project::Metadata;

/// `src/app/layout.tsx`. `stylesheet_import` is a module specifier
/// relative to `src/app`.
pub fn root_layout(metadata: &Metadata, stylesheet_import: Option<&str>) -> String {
    let mut out = String::from("import type { Metadata } from 'next'\n");
    if let Some(stylesheet) = stylesheet_import {
        out.push_str(&format!("import '{}'\n", stylesheet));
    }
    out.push_str(&format!(
        r#"
export const metadata: Metadata = {{
  title: {title},
  description: {description},
}}

export default function RootLayout({{
  children,
}}: {{
  children: React.ReactNode
}}) {{
  return (
    <html lang="en">
      <body>
        <div id="root">{{children}}</div>
      </body>
    </html>
  )
}}
"#,
        title = js_string(&metadata.title),
        description = js_string(&metadata.description),
    ));
    out
}

/// `src/app/[[...slug]]/page.tsx`: one statically exported page that
/// hands every path to the client-side app
pub fn entry_page() -> String {
    r#"import { ClientOnly } from './client'

export function generateStaticParams() {
  return [{ slug: [''] }]
}

export default function Page() {
  return <ClientOnly />
}
"#
    .to_string()
}

/// `src/app/[[...slug]]/client.tsx`. `component_import` is relative to the
/// catch-all directory, without extension.
pub fn client_wrapper(component_import: &str) -> String {
    format!(
        r#"'use client'

import dynamic from 'next/dynamic'

const App = dynamic(() => import('{component}'), {{ ssr: false }})

export function ClientOnly() {{
  return <App />
}}
"#,
        component = component_import,
    )
}

/// `src/utils/env.ts`. `names` are public variable names without prefix;
/// each is read with a static `process.env.NEXT_PUBLIC_*` access so Next.js
/// can inline it into the client bundle. Names that are not identifiers
/// (e.g. `1ST_URL`) are written as quoted keys.
pub fn env_helper(names: &[String]) -> String {
    let mut entries = String::new();
    for name in names {
        let key = if is_identifier(name) {
            name.clone()
        } else {
            js_string(name)
        };
        entries.push_str(&format!(
            "  {key}: process.env.NEXT_PUBLIC_{name},\n",
            key = key,
            name = name
        ));
    }

    format!(
        r#"// Public environment variables, formerly exposed through import.meta.env.VITE_*.
// Regenerate with `nextport migrate` after adding variables to .env files.

export const publicEnv = {{
{entries}}} as const

export type PublicEnvName = keyof typeof publicEnv

export function getEnv(name: PublicEnvName, fallback?: string): string | undefined {{
  return publicEnv[name] ?? fallback
}}

export function requireEnv(name: PublicEnvName): string {{
  const value = publicEnv[name]
  if (value === undefined || value === '') {{
    throw new Error(`Missing environment variable NEXT_PUBLIC_${{name}}`)
  }}
  return value
}}

export const isProduction = process.env.NODE_ENV === 'production'
export const isDevelopment = process.env.NODE_ENV === 'development'
"#,
        entries = entries,
    )
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
