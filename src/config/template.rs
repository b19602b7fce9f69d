//! Starter configuration written by `extractor-scaffold init`.

/// Commented starter `configuration.yaml`. Parses to `ExtractorConfig::default()`.
pub const CONFIG_TEMPLATE: &str = r#"# Extractor configuration information.

# Name of the extractor. Alphanumeric characters are allowed as well as
# hyphens and underscores '-' and '_'.
extractor_name: ""

# Name of the scientific method for this extractor. Leave commented out if unknown.
#method_name: ""

# The version number of the extractor.
version: "1.0"

# The extractor description.
description: ""

# The name and email of the author of the extractor.
author_name: ""
author_email: ""

# Repository URI of where the source code lives.
repository: ""

# Citation for the algorithm.
citation_author: ""
citation_title: ""
citation_year: ""

# Output variable identifiers. Use a comma separated list if more than one
# value is returned, for example "variable 1,variable 2". Variable names cannot
# contain commas. All white space is kept intact; extra whitespace may cause
# name comparisons to fail.
variable_names: ""

# Uncomment to indicate the extractor is to never write to TERRA REF Geostreams.
#never_write_geostreams: true

# Uncomment to indicate the extractor is to never write to BETYdb.
#never_write_betydb: true

# Uncomment to never write CSV files.
#never_write_csv: true
"#;
