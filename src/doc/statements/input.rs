/*!
# `INPUT <variable>`

## Purpose
Asks the user for a value.

## Remarks
The edit line is used to type the value. For a number it may be any
expression, and a syntax error is marked and asked again. For a string
everything typed is taken as is, except a quote which is marked.
Break stops the program. `INPUT` only works in a running program;
in direct mode it is `INPUT NOT IN PROGRAM`.

## Example
```text
10 INPUT N
20 PRINT N*N
```

*/
