/// `next.config.mjs`: static SPA export into Vite's old output directory
pub fn next_config() -> String {
    r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  output: 'export', // Outputs a Single-Page Application (SPA)
  distDir: './dist', // Keeps the build output in ./dist like Vite did
}

export default nextConfig
"#
    .to_string()
}

/// `next-env.d.ts`, identical to the one `next dev` would create
pub fn next_env_dts() -> String {
    r#"/// <reference types="next" />
/// <reference types="next/image-types/global" />

// NOTE: This file should not be edited
// see https://nextjs.org/docs/app/building-your-application/configuring/typescript for more information.
"#
    .to_string()
}
