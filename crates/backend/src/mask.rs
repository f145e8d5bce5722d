//! Trader group masks such as `"demo*,real\\eur*,!real\\eur-test"`.
//!
//! A mask is a comma-separated list of patterns. `*` matches any run of
//! characters, a leading `!` excludes matching groups. A group is selected when
//! it matches at least one inclusive pattern (or the mask has none) and no
//! exclusive one. Matching ignores ASCII case. An empty mask selects every group.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMask {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl GroupMask {
    pub fn parse(mask: &str) -> Self {
        let mut parsed = GroupMask::default();
        for pattern in mask.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match pattern.strip_prefix('!') {
                Some(negated) => parsed.exclude.push(negated.trim().to_ascii_lowercase()),
                None => parsed.include.push(pattern.to_ascii_lowercase()),
            }
        }
        parsed
    }

    pub fn matches(&self, group: &str) -> bool {
        let group = group.to_ascii_lowercase();
        let included =
            self.include.is_empty() || self.include.iter().any(|p| wildcard_match(p, &group));
        included && !self.exclude.iter().any(|p| wildcard_match(p, &group))
    }
}

/// Glob match supporting `*` only, with single-star backtracking.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p = pattern.as_bytes();
    let t = text.as_bytes();
    let (mut pi, mut ti) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((star_pi, star_ti)) = star {
            pi = star_pi + 1;
            ti = star_ti + 1;
            star = Some((star_pi, star_ti + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == b'*')
}
