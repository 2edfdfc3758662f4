#![allow(missing_docs)]
#![allow(dead_code)]

use bstr::ByteSlice;

pub const CALC: &str = r#"%{
#include <stdio.h>
int yylex(void);
%}

%union { double num; }
%token <num> NUM
%left '+' '-'

%%
input : /* empty */
      | input line
      ;

line : '\n'
     | expr '\n'  { printf ("%g\n", $1); }
     ;

expr : NUM             { $$ = $1; }
     | expr '+' expr   { $$ = $1 + $3; }
     | '(' expr ')'    { $$ = $2; }
     ;
%%
"#;

/// Marks each line end with `$` so trailing blanks and blank lines show up
/// in snapshots.
pub fn render(out: &[u8]) -> String {
    out.split_str("\n")
        .map(|line| format!("{}$", line.as_bstr()))
        .collect::<Vec<_>>()
        .join("\n")
}
